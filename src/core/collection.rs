use tracing::debug;

use super::{Tab, TabError, TabEvent, TabId};

/// Ordered list of tabs. Order is left-to-right display order.
///
/// Invariants: identities are unique, at most one tab is selected, and
/// positions are dense (`0..len`). Zero selection is only possible when the
/// collection is empty or before the first `select`.
#[derive(Debug, Default)]
pub struct TabCollection {
    tabs: Vec<Tab>,
    next_id: u64,
    events: Vec<TabEvent>,
}

/// Index that inherits selection after the selected tab at `removed_index` goes away.
///
/// Returns `None` when nothing is left to select or the index was invalid.
pub(crate) fn selection_after_remove(removed_index: usize, len_before: usize) -> Option<usize> {
    if len_before == 0 || removed_index >= len_before {
        return None;
    }
    let len_after = len_before - 1;
    if len_after == 0 {
        return None;
    }
    Some(removed_index.min(len_after - 1))
}

impl TabCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tab> {
        self.tabs.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn get_by_id(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id() == id)
    }

    /// Mutable access for host-owned fields such as the title.
    pub fn get_by_id_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|tab| tab.id() == id)
    }

    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id() == id)
    }

    pub fn ids(&self) -> Vec<TabId> {
        self.tabs.iter().map(Tab::id).collect()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.tabs.iter().position(Tab::is_selected)
    }

    pub fn selected_id(&self) -> Option<TabId> {
        self.tabs.iter().find(|tab| tab.is_selected()).map(Tab::id)
    }

    /// Appends an unselected tab at the end.
    pub fn append(&mut self, title: impl Into<String>) -> &Tab {
        let id = TabId::from_raw(self.next_id);
        self.next_id += 1;
        let index = self.tabs.len();
        self.tabs.push(Tab::new(id, title.into()));
        self.events.push(TabEvent::TabAdded { id, index });
        &self.tabs[index]
    }

    /// Removes the tab with `id`. Returns `None` when no such tab exists.
    ///
    /// If the removed tab was selected, selection moves to
    /// `min(removed_index, len - 1)` of the remaining tabs.
    pub fn remove(&mut self, id: TabId) -> Option<Tab> {
        let index = self.index_of(id)?;
        let len_before = self.tabs.len();
        let removed = self.tabs.remove(index);
        self.events.push(TabEvent::TabClosed { id, index });

        if removed.is_selected() {
            let current = selection_after_remove(index, len_before).map(|next| {
                self.tabs[next].selected = true;
                self.tabs[next].id()
            });
            self.events.push(TabEvent::SelectionChanged {
                previous: Some(id),
                current,
            });
        }
        debug!(tab = %id, index, "tab removed");
        Some(removed)
    }

    /// Selects the tab at `index`, clearing every other selection flag.
    pub fn select(&mut self, index: usize) -> Result<(), TabError> {
        let len = self.tabs.len();
        if index >= len {
            return Err(TabError::IndexOutOfRange { index, len });
        }
        let previous = self.selected_id();
        let current = self.tabs[index].id();
        for tab in &mut self.tabs {
            tab.selected = false;
        }
        self.tabs[index].selected = true;
        if previous != Some(current) {
            self.events.push(TabEvent::SelectionChanged {
                previous,
                current: Some(current),
            });
        }
        Ok(())
    }

    pub fn select_id(&mut self, id: TabId) -> Result<(), TabError> {
        let index = self.index_of(id).ok_or(TabError::UnknownTab(id))?;
        self.select(index)
    }

    /// Moves the tab at `from` so it ends up at `to` (post-removal indexing).
    ///
    /// Both indices are validated before anything changes.
    pub fn move_tab(&mut self, from: usize, to: usize) -> Result<(), TabError> {
        let len = self.tabs.len();
        for index in [from, to] {
            if index >= len {
                return Err(TabError::IndexOutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(());
        }
        let tab = self.tabs.remove(from);
        let id = tab.id();
        self.tabs.insert(to, tab);
        self.events.push(TabEvent::OrderChanged { id, from, to });
        debug!(tab = %id, from, to, "tab moved");
        Ok(())
    }

    /// Takes the events queued by mutations since the last call.
    pub(crate) fn take_events(&mut self) -> Vec<TabEvent> {
        std::mem::take(&mut self.events)
    }
}

impl<'a> IntoIterator for &'a TabCollection {
    type Item = &'a Tab;
    type IntoIter = std::slice::Iter<'a, Tab>;

    fn into_iter(self) -> Self::IntoIter {
        self.tabs.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core_collection.rs"]
mod tests;
