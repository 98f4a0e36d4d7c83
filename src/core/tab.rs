use std::fmt;

/// Opaque tab identity. Assigned once by the owning collection and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(u64);

impl TabId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        TabId(raw)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One open tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tab {
    id: TabId,
    pub title: String,
    pub(crate) selected: bool,
}

impl Tab {
    pub(crate) fn new(id: TabId, title: String) -> Self {
        Tab {
            id,
            title,
            selected: false,
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    /// Selection is owned by the collection; see [`super::TabCollection::select`].
    pub fn is_selected(&self) -> bool {
        self.selected
    }
}
