//! Drag-to-reorder state machine.
//!
//! `Idle -> Dragging(session) -> Idle`. The host forwards pointer events;
//! the engine decides neighbour crossings, tracks the live insert index and
//! commits the final position into the [`TabCollection`] when the gesture
//! ends. Only one session exists at a time.

mod session;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::layout::SlotGeometry;
use super::{TabCollection, TabError, TabEvent, TabId};

pub use session::DragSession;
use session::Step;

/// How crossings are reflected while the pointer is still down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragStrategy {
    /// Neighbours slide out of the way visually; the model changes once, on release.
    #[default]
    Transform,
    /// Every crossing reorders the model immediately; neighbours carry no offsets.
    LiveSwap,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReorderOptions {
    pub strategy: DragStrategy,
    /// When set, a cancelled drag keeps the position it reached (like a drop).
    /// Otherwise the tab returns to where the drag started.
    pub commit_on_cancel: bool,
    /// Selects the dragged tab as soon as the drag starts. Off by default:
    /// dragging alone never changes which tab is selected.
    pub select_on_drag_start: bool,
}

impl Default for ReorderOptions {
    fn default() -> Self {
        Self {
            strategy: DragStrategy::Transform,
            commit_on_cancel: true,
            select_on_drag_start: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Result of one move event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Unchanged,
    Crossed { neighbor: usize, insert_index: usize },
    Backtracked { neighbor: usize, insert_index: usize },
}

/// Net effect of a finished drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragCommit {
    pub id: TabId,
    pub from: usize,
    pub to: usize,
    /// False when the tab was put back at `from` (non-committing cancel).
    pub committed: bool,
}

#[derive(Debug, Default)]
pub struct ReorderEngine {
    options: ReorderOptions,
    state: DragState,
    events: Vec<TabEvent>,
}

impl ReorderEngine {
    pub fn new(options: ReorderOptions) -> Self {
        Self {
            options,
            state: DragState::Idle,
            events: Vec::new(),
        }
    }

    pub fn options(&self) -> &ReorderOptions {
        &self.options
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// The tab currently lifted above its neighbours, if any.
    pub fn lifted(&self) -> Option<TabId> {
        self.session().map(DragSession::dragged_id)
    }

    /// Index the dragged tab occupies in the collection while the gesture is live.
    fn model_index(&self, session: &DragSession) -> usize {
        match self.options.strategy {
            DragStrategy::Transform => session.original_index,
            DragStrategy::LiveSwap => session.current_insert_index,
        }
    }

    /// `Idle -> Dragging`. Rejects a second start while a session is active.
    pub fn drag_start(
        &mut self,
        tabs: &mut TabCollection,
        id: TabId,
        geometry: &SlotGeometry,
    ) -> Result<usize, TabError> {
        if let DragState::Dragging(session) = &self.state {
            warn!(tab = %id, dragged = %session.dragged_id, "drag start while a drag is active");
            return Err(TabError::DragInProgress {
                dragged: session.dragged_id,
            });
        }
        let index = tabs.index_of(id).ok_or(TabError::UnknownTab(id))?;
        if self.options.select_on_drag_start {
            tabs.select(index)?;
        }
        self.state = DragState::Dragging(DragSession::new(id, index, geometry.tab_width));
        self.events.push(TabEvent::DragStarted { id, index });
        debug!(tab = %id, index, "drag started");
        Ok(index)
    }

    /// `Dragging -> Dragging`. Commits at most one crossing per call.
    pub fn drag_move(
        &mut self,
        tabs: &mut TabCollection,
        id: TabId,
        displacement: f32,
        geometry: &SlotGeometry,
    ) -> Result<MoveOutcome, TabError> {
        let strategy = self.options.strategy;
        let expected = match &self.state {
            DragState::Dragging(session) if session.dragged_id == id => self.model_index(session),
            _ => return Err(TabError::NoActiveDrag(id)),
        };
        if tabs.index_of(id) != Some(expected) {
            warn!(tab = %id, "dragged tab vanished or moved underneath the drag");
            self.abort(tabs);
            return Err(TabError::UnknownTab(id));
        }

        let DragState::Dragging(session) = &mut self.state else {
            return Err(TabError::NoActiveDrag(id));
        };
        session.rescale(geometry.tab_width);
        session.displacement = displacement;
        let step = session.evaluate(geometry, tabs.len());
        trace!(tab = %id, displacement, ?step, "drag move");

        let record_offsets = strategy == DragStrategy::Transform;
        let before = session.apply(step, record_offsets);
        let after = session.current_insert_index;
        if strategy == DragStrategy::LiveSwap && before != after {
            tabs.move_tab(before, after)?;
        }

        let outcome = match step {
            Step::CrossRight(neighbor) | Step::CrossLeft(neighbor) => MoveOutcome::Crossed {
                neighbor,
                insert_index: after,
            },
            Step::Backtrack(neighbor) => MoveOutcome::Backtracked {
                neighbor,
                insert_index: after,
            },
            Step::Hold => MoveOutcome::Unchanged,
        };
        if outcome != MoveOutcome::Unchanged {
            debug!(tab = %id, ?outcome, "drag crossing");
        }
        Ok(outcome)
    }

    /// `Dragging -> Idle`, committing the reached position.
    pub fn drag_end(&mut self, tabs: &mut TabCollection, id: TabId) -> Result<DragCommit, TabError> {
        self.finish(tabs, id, true)
    }

    /// `Dragging -> Idle`. Commits like [`Self::drag_end`] unless
    /// `commit_on_cancel` is off, in which case the tab returns to its start.
    pub fn drag_cancel(
        &mut self,
        tabs: &mut TabCollection,
        id: TabId,
    ) -> Result<DragCommit, TabError> {
        let commit = self.options.commit_on_cancel;
        self.finish(tabs, id, commit)
    }

    /// Discards the session without committing it.
    ///
    /// Used when the strip changes under an active drag (a tab closed). A
    /// live-swapped tab is put back at the index the drag started from.
    pub fn abort(&mut self, tabs: &mut TabCollection) -> Option<TabId> {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return None;
        };
        let id = session.dragged_id;
        if self.options.strategy == DragStrategy::LiveSwap {
            let reached = session.current_insert_index;
            if tabs.index_of(id) == Some(reached) {
                if let Err(err) = tabs.move_tab(reached, session.original_index) {
                    warn!(tab = %id, %err, "could not restore live-swapped tab");
                }
            }
        }
        self.events.push(TabEvent::DragEnded {
            id,
            committed: false,
        });
        debug!(tab = %id, "drag aborted");
        Some(id)
    }

    /// Re-measures an active session against the current slot grid.
    ///
    /// The tab width changes when tabs are added or the strip is resized
    /// mid-drag; neighbour offsets and the dragged tab's edges follow it.
    pub fn sync_geometry(&mut self, geometry: &SlotGeometry) {
        if let DragState::Dragging(session) = &mut self.state {
            if session.dragged_width != geometry.tab_width {
                trace!(tab = %session.dragged_id, width = geometry.tab_width, "drag re-measured");
                session.rescale(geometry.tab_width);
            }
        }
    }

    fn finish(
        &mut self,
        tabs: &mut TabCollection,
        id: TabId,
        commit: bool,
    ) -> Result<DragCommit, TabError> {
        let session = match std::mem::take(&mut self.state) {
            DragState::Dragging(session) if session.dragged_id == id => session,
            other => {
                self.state = other;
                return Err(TabError::NoActiveDrag(id));
            }
        };

        let from = session.original_index;
        let reached = session.current_insert_index;
        let model_index = match self.options.strategy {
            DragStrategy::Transform => from,
            DragStrategy::LiveSwap => reached,
        };
        if tabs.index_of(id) != Some(model_index) {
            warn!(tab = %id, "dragged tab vanished before drop; nothing committed");
            self.events.push(TabEvent::DragEnded { id, committed: false });
            return Err(TabError::UnknownTab(id));
        }

        let target = if commit { reached } else { from };
        tabs.move_tab(model_index, target)?;
        self.events.push(TabEvent::DragEnded { id, committed: commit });
        debug!(tab = %id, from, to = target, commit, "drag finished");
        Ok(DragCommit {
            id,
            from,
            to: target,
            committed: commit,
        })
    }

    pub(crate) fn take_events(&mut self) -> Vec<TabEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/core_reorder.rs"]
mod tests;
