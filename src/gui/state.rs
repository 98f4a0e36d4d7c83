use std::sync::Arc;

use softbuffer::{Context, Surface};
use winit::event_loop::OwnedDisplayHandle;
use winit::keyboard::ModifiersState;
use winit::window::Window;

use crate::config::{AppConfig, ThemePalette};
use crate::core::{TabBar, TabId};

use super::text::TextRenderer;

/// Pointer gesture on a tab, armed on press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct PointerDrag {
    pub(super) tab: TabId,
    pub(super) start_x: f32, // Logical x at press.
    pub(super) start_y: f32, // Logical y at press.
    pub(super) active: bool, // True once the activation threshold was exceeded.
}

impl PointerDrag {
    pub(super) fn armed(tab: TabId, x: f32, y: f32) -> Self {
        PointerDrag {
            tab,
            start_x: x,
            start_y: y,
            active: false,
        }
    }

    pub(super) fn exceeds(&self, x: f32, y: f32, threshold: f32) -> bool {
        let dx = x - self.start_x;
        let dy = y - self.start_y;
        (dx * dx + dy * dy).sqrt() > threshold
    }

    pub(super) fn displacement(&self, x: f32) -> f32 {
        x - self.start_x
    }
}

pub(super) struct DemoWindow {
    pub(super) window: Arc<Window>,
    pub(super) surface: Surface<OwnedDisplayHandle, Arc<Window>>,
    pub(super) bar: TabBar,
    pub(super) palette: ThemePalette,
    /// Title renderer; `None` when no font could be loaded.
    pub(super) text: Option<TextRenderer>,
    pub(super) sidebar_width: f32,
    pub(super) sidebar_visible: bool,
    /// Strip scroll in logical pixels, kept within the overflow.
    pub(super) scroll_x: f32,
    pub(super) activation_threshold: f32,
    pub(super) modifiers: ModifiersState,
    /// Last pointer position in logical pixels.
    pub(super) mouse_pos: (f32, f32),
    pub(super) pointer: Option<PointerDrag>,
    pub(super) window_title: String,
}

pub(super) struct App {
    pub(super) config: AppConfig,
    pub(super) context: Option<Context<OwnedDisplayHandle>>,
    pub(super) window: Option<DemoWindow>,
}

#[cfg(test)]
#[path = "../../tests/unit/gui_state.rs"]
mod tests;
