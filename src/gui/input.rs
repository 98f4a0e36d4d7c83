use tracing::warn;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta};
use winit::keyboard::{Key, NamedKey};
use winit::window::CursorIcon;

use crate::core::TabId;
use crate::core::layout::{self, StripHit};

use super::state::PointerDrag;

/// Logical pixels scrolled per wheel line.
const WHEEL_LINE_PX: f32 = 40.0;
use crate::gui::*;

impl DemoWindow {
    fn command_modifier(&self) -> bool {
        self.modifiers.control_key() || self.modifiers.super_key()
    }

    pub(super) fn on_cursor_moved(&mut self, position: PhysicalPosition<f64>) -> bool {
        let scale = self.scale();
        let (x, y) = (position.x as f32 / scale, position.y as f32 / scale);
        self.mouse_pos = (x, y);

        let Some(mut drag) = self.pointer else {
            return false;
        };
        if !drag.active {
            if !drag.exceeds(x, y, self.activation_threshold) {
                return false;
            }
            if let Err(err) = self.bar.drag_start(drag.tab) {
                warn!(%err, "could not start tab drag");
                self.pointer = None;
                self.after_bar_update();
                return false;
            }
            drag.active = true;
            self.window.set_cursor(CursorIcon::Grabbing);
        }

        if let Err(err) = self.bar.drag_move(drag.tab, drag.displacement(x)) {
            warn!(%err, "tab drag dropped");
            self.pointer = None;
            self.window.set_cursor(CursorIcon::Default);
        } else {
            self.pointer = Some(drag);
        }
        self.after_bar_update();
        true
    }

    pub(super) fn on_mouse_input(&mut self, state: ElementState, button: MouseButton) -> bool {
        if button != MouseButton::Left {
            return false;
        }
        match state {
            ElementState::Pressed => self.on_left_press(),
            ElementState::Released => self.on_left_release(),
        }
    }

    fn on_left_press(&mut self) -> bool {
        let (x, y) = self.mouse_pos;
        let chrome = self.chrome();
        if chrome.sidebar_toggle.contains(x, y) {
            self.toggle_sidebar();
            return true;
        }
        let Some((sx, sy)) = chrome.to_strip(x, y) else {
            return false;
        };

        let geometry = self.bar.geometry();
        let count = self.bar.tabs().len();
        let hit = layout::hit_test(&geometry.metrics, sx, sy, count, geometry.tab_width);
        match hit {
            StripHit::CloseTab(index) => {
                if let Some(id) = self.tab_id_at(index) {
                    self.bar.close_tab(id);
                }
            }
            StripHit::Tab(index) => {
                if let Some(id) = self.tab_id_at(index) {
                    self.bar.select_tab(id);
                    self.pointer = Some(PointerDrag::armed(id, x, y));
                }
            }
            StripHit::NewTab => {
                self.bar.new_tab();
            }
            StripHit::Empty => return false,
        }
        self.after_bar_update();
        true
    }

    fn tab_id_at(&self, index: usize) -> Option<TabId> {
        self.bar.tabs().get(index).map(|tab| tab.id())
    }

    fn on_left_release(&mut self) -> bool {
        let Some(drag) = self.pointer.take() else {
            return false;
        };
        if !drag.active {
            return false;
        }
        if let Err(err) = self.bar.drag_end(drag.tab) {
            warn!(%err, "tab drop ignored");
        }
        self.window.set_cursor(CursorIcon::Default);
        self.after_bar_update();
        true
    }

    /// Ends an active drag through the cancel path (Escape, focus loss, pointer left).
    pub(super) fn cancel_pointer_drag(&mut self) {
        let Some(drag) = self.pointer.take() else {
            return;
        };
        if drag.active {
            if let Err(err) = self.bar.drag_cancel(drag.tab) {
                warn!(%err, "tab drag cancel ignored");
            }
            self.window.set_cursor(CursorIcon::Default);
            self.after_bar_update();
        }
    }

    /// Scrolls the strip while the pointer is over it. Vertical wheels scroll
    /// horizontally since the strip has no vertical extent.
    pub(super) fn on_mouse_wheel(&mut self, delta: MouseScrollDelta) -> bool {
        let (x, y) = self.mouse_pos;
        if self.chrome().to_strip(x, y).is_none() {
            return false;
        }
        let step = wheel_step(delta, self.scale());
        self.scroll_by(step)
    }

    pub(super) fn on_keyboard_input(&mut self, event: &KeyEvent) -> bool {
        if event.state != ElementState::Pressed {
            return false;
        }
        if let Key::Named(NamedKey::Escape) = event.logical_key {
            self.cancel_pointer_drag();
            return true;
        }
        if !self.command_modifier() {
            return false;
        }

        let shift = self.modifiers.shift_key();
        match &event.logical_key {
            Key::Character(c) if c.eq_ignore_ascii_case("t") => {
                self.bar.new_tab();
            }
            Key::Character(c) if c.eq_ignore_ascii_case("w") => {
                if let Some(id) = self.bar.tabs().selected_id() {
                    self.bar.close_tab(id);
                }
            }
            Key::Character(c) if c.as_str() == "\\" => self.toggle_sidebar(),
            Key::Named(NamedKey::Tab) => self.cycle_selection(!shift),
            Key::Named(NamedKey::PageUp) if shift => self.shift_selected(-1),
            Key::Named(NamedKey::PageDown) if shift => self.shift_selected(1),
            _ => return false,
        }
        self.after_bar_update();
        true
    }

    fn cycle_selection(&mut self, forward: bool) {
        let len = self.bar.tabs().len();
        let Some(current) = self.bar.tabs().selected_index() else {
            return;
        };
        if len < 2 {
            return;
        }
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        if let Err(err) = self.bar.select_index(next) {
            warn!(%err, "selection shortcut ignored");
        }
    }

    /// Moves the selected tab one slot left or right.
    fn shift_selected(&mut self, delta: isize) {
        let len = self.bar.tabs().len();
        let Some(from) = self.bar.tabs().selected_index() else {
            return;
        };
        let Some(to) = from.checked_add_signed(delta).filter(|&to| to < len) else {
            return;
        };
        if let Err(err) = self.bar.move_tab(from, to) {
            warn!(%err, "move shortcut ignored");
        }
    }
}

/// Horizontal scroll in logical pixels for one wheel event. Positive scrolls
/// towards the trailing tabs.
pub(super) fn wheel_step(delta: MouseScrollDelta, scale: f32) -> f32 {
    let (dx, dy) = match delta {
        MouseScrollDelta::LineDelta(x, y) => (x * WHEEL_LINE_PX, y * WHEEL_LINE_PX),
        MouseScrollDelta::PixelDelta(pos) => (pos.x as f32 / scale, pos.y as f32 / scale),
    };
    // Wheel-down (negative y) and swipe-left (negative x) both move right.
    let step = if dx.abs() > dy.abs() { -dx } else { -dy };
    if step.is_finite() { step } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/gui_input.rs"]
mod tests;
