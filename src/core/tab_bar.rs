use tracing::{debug, info};

use super::events::{EventBus, TabEventListener};
use super::layout::{SlotGeometry, StripMetrics};
use super::reorder::{DragCommit, MoveOutcome, ReorderEngine, ReorderOptions};
use super::snapshot::TabBarSnapshot;
use super::{TabCollection, TabError, TabEvent, TabId};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabBarConfig {
    pub metrics: StripMetrics,
    pub reorder: ReorderOptions,
    /// Refuse to close the only remaining tab.
    pub keep_last_tab: bool,
    /// Select tabs created through [`TabBar::add_tab`] / [`TabBar::new_tab`].
    pub select_new_tabs: bool,
    /// Number of `Tab N` tabs created by [`TabBar::new`].
    pub initial_tabs: usize,
}

impl Default for TabBarConfig {
    fn default() -> Self {
        Self {
            metrics: StripMetrics::default(),
            reorder: ReorderOptions::default(),
            keep_last_tab: true,
            select_new_tabs: true,
            initial_tabs: 3,
        }
    }
}

/// The host-facing tab bar: tab model, reorder engine and event fan-out.
///
/// Every inbound call is synchronous; [`TabBar::snapshot`] reflects it
/// immediately and subscribers have already been notified when it returns.
#[derive(Debug)]
pub struct TabBar {
    tabs: TabCollection,
    engine: ReorderEngine,
    bus: EventBus,
    config: TabBarConfig,
    strip_width: Option<f32>,
}

impl TabBar {
    /// Creates the bar with `initial_tabs` tabs and the first one selected.
    pub fn new(config: TabBarConfig) -> Self {
        let mut bar = TabBar {
            tabs: TabCollection::new(),
            engine: ReorderEngine::new(config.reorder),
            bus: EventBus::new(),
            config,
            strip_width: None,
        };
        for n in 1..=config.initial_tabs {
            bar.tabs.append(format!("Tab {n}"));
        }
        if !bar.tabs.is_empty() {
            let _ = bar.tabs.select(0);
        }
        bar.flush();
        bar
    }

    pub fn config(&self) -> &TabBarConfig {
        &self.config
    }

    pub fn tabs(&self) -> &TabCollection {
        &self.tabs
    }

    pub fn engine(&self) -> &ReorderEngine {
        &self.engine
    }

    pub fn geometry(&self) -> SlotGeometry {
        SlotGeometry::new(self.config.metrics, self.tabs.len(), self.strip_width)
    }

    /// Sets the width the strip may occupy (`None` = unconstrained).
    pub fn resize(&mut self, strip_width: Option<f32>) {
        self.strip_width = strip_width;
        self.engine.sync_geometry(&self.geometry());
    }

    pub fn subscribe(&mut self, listener: impl TabEventListener + 'static) {
        self.bus.subscribe(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.bus.listener_count()
    }

    /// Events delivered since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<TabEvent> {
        self.bus.drain()
    }

    pub fn snapshot(&self) -> TabBarSnapshot {
        TabBarSnapshot::build(&self.tabs, &self.engine, &self.geometry())
    }

    pub fn add_tab(&mut self, title: impl Into<String>) -> TabId {
        let id = self.tabs.append(title).id();
        if self.config.select_new_tabs || self.tabs.len() == 1 {
            let _ = self.tabs.select_id(id);
        }
        self.engine.sync_geometry(&self.geometry());
        self.flush();
        id
    }

    /// Adds a tab titled `Tab N`, N being the new tab count.
    pub fn new_tab(&mut self) -> TabId {
        let title = format!("Tab {}", self.tabs.len() + 1);
        self.add_tab(title)
    }

    /// Closes `id`. Returns false when it is unknown or is the last tab
    /// under `keep_last_tab`.
    pub fn close_tab(&mut self, id: TabId) -> bool {
        if self.tabs.index_of(id).is_none() {
            debug!(tab = %id, "close for unknown tab ignored");
            return false;
        }
        if self.config.keep_last_tab && self.tabs.len() <= 1 {
            info!(tab = %id, "refusing to close the last tab");
            return false;
        }
        // Slot indices held by the session would be stale after removal. The
        // abort is queued first so subscribers see DragEnded before TabClosed.
        if self.engine.abort(&mut self.tabs).is_some() {
            self.bus.extend(self.tabs.take_events());
            self.bus.extend(self.engine.take_events());
        }
        let closed = self.tabs.remove(id).is_some();
        self.flush();
        closed
    }

    pub fn select_tab(&mut self, id: TabId) -> bool {
        let selected = match self.tabs.select_id(id) {
            Ok(()) => true,
            Err(err) => {
                debug!(%err, "select ignored");
                false
            }
        };
        self.flush();
        selected
    }

    pub fn select_index(&mut self, index: usize) -> Result<(), TabError> {
        let result = self.tabs.select(index);
        self.flush();
        result
    }

    pub fn rename_tab(&mut self, id: TabId, title: impl Into<String>) -> bool {
        match self.tabs.get_by_id_mut(id) {
            Some(tab) => {
                tab.title = title.into();
                true
            }
            None => false,
        }
    }

    /// Programmatic reorder (keyboard shortcuts). Not allowed mid-drag.
    pub fn move_tab(&mut self, from: usize, to: usize) -> Result<(), TabError> {
        if let Some(dragged) = self.engine.lifted() {
            return Err(TabError::DragInProgress { dragged });
        }
        let result = self.tabs.move_tab(from, to);
        self.flush();
        result
    }

    pub fn drag_start(&mut self, id: TabId) -> Result<usize, TabError> {
        let geometry = self.geometry();
        let result = self.engine.drag_start(&mut self.tabs, id, &geometry);
        self.flush();
        result
    }

    pub fn drag_move(&mut self, id: TabId, displacement: f32) -> Result<MoveOutcome, TabError> {
        let geometry = self.geometry();
        let result = self
            .engine
            .drag_move(&mut self.tabs, id, displacement, &geometry);
        self.flush();
        result
    }

    pub fn drag_end(&mut self, id: TabId) -> Result<DragCommit, TabError> {
        let result = self.engine.drag_end(&mut self.tabs, id);
        self.flush();
        result
    }

    pub fn drag_cancel(&mut self, id: TabId) -> Result<DragCommit, TabError> {
        let result = self.engine.drag_cancel(&mut self.tabs, id);
        self.flush();
        result
    }

    fn flush(&mut self) {
        self.bus.extend(self.tabs.take_events());
        self.bus.extend(self.engine.take_events());
        self.bus.dispatch();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core_tab_bar.rs"]
mod tests;
