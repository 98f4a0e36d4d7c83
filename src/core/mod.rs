mod collection;
mod error;
mod tab;
mod tab_bar;

pub mod events;
pub mod layout;
pub mod reorder;
pub mod snapshot;

pub use collection::TabCollection;
pub use error::TabError;
pub use events::{TabEvent, TabEventListener};
pub use reorder::{DragCommit, DragSession, DragStrategy, MoveOutcome, ReorderEngine, ReorderOptions};
pub use snapshot::{TabBarSnapshot, TabFrame};
pub use tab::{Tab, TabId};
pub use tab_bar::{TabBar, TabBarConfig};
