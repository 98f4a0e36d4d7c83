//! Typed change notifications emitted by the tab bar.
//!
//! Mutations queue events; the owner flushes the queue to every subscriber
//! in emission order. Observers never get a handle back into the model, so
//! they cannot re-enter it while a mutation is in flight.

use super::TabId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TabEvent {
    TabAdded {
        id: TabId,
        index: usize,
    },
    TabClosed {
        id: TabId,
        index: usize,
    },
    /// Selection ownership moved. `current` is `None` only when the last tab was removed.
    SelectionChanged {
        previous: Option<TabId>,
        current: Option<TabId>,
    },
    /// A tab's model position changed.
    OrderChanged {
        id: TabId,
        from: usize,
        to: usize,
    },
    DragStarted {
        id: TabId,
        index: usize,
    },
    /// A drag session ended. `committed` is false when it was cancelled without a commit
    /// or discarded because the strip changed underneath it.
    DragEnded {
        id: TabId,
        committed: bool,
    },
}

/// Receives tab bar events.
pub trait TabEventListener {
    fn on_tab_event(&mut self, event: &TabEvent);
}

impl<F> TabEventListener for F
where
    F: FnMut(&TabEvent),
{
    fn on_tab_event(&mut self, event: &TabEvent) {
        self(event)
    }
}

/// Pending-event queue plus the list of subscribers it is flushed to.
#[derive(Default)]
pub struct EventBus {
    pending: Vec<TabEvent>,
    delivered: Vec<TabEvent>,
    listeners: Vec<Box<dyn TabEventListener>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl TabEventListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn extend(&mut self, events: impl IntoIterator<Item = TabEvent>) {
        self.pending.extend(events);
    }

    /// Delivers every queued event to all listeners, oldest first.
    pub fn dispatch(&mut self) {
        for event in self.pending.drain(..) {
            for listener in &mut self.listeners {
                listener.on_tab_event(&event);
            }
            self.delivered.push(event);
        }
    }

    /// Takes the events delivered since the last drain.
    pub fn drain(&mut self) -> Vec<TabEvent> {
        std::mem::take(&mut self.delivered)
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("pending", &self.pending)
            .field("delivered", &self.delivered.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
