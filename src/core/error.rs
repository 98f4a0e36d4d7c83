use super::TabId;

/// Failures surfaced by the tab model and the reorder engine.
///
/// None of these are fatal: every failing operation leaves the collection
/// exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TabError {
    /// An index outside `0..len` was passed to `select` or `move_tab`.
    #[error("tab index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// No tab with this identity exists (it may have been closed).
    #[error("unknown tab {0}")]
    UnknownTab(TabId),
    /// A drag start arrived while another drag gesture is still active.
    #[error("drag already in progress for tab {dragged}")]
    DragInProgress { dragged: TabId },
    /// A drag move/end/cancel arrived with no matching drag session.
    #[error("no active drag for tab {0}")]
    NoActiveDrag(TabId),
}
