//! Window chrome around the strip: toolbar band, sidebar toggle, sidebar and
//! content area. Everything here is in logical pixels.

use unicode_width::UnicodeWidthChar;

use crate::core::layout::{Rect, StripMetrics};

const TOGGLE_SIZE: f32 = 24.0;
const TOGGLE_MARGIN: f32 = 8.0;
/// Width of the window title before it gets an ellipsis.
pub(super) const TITLE_MAX_COLUMNS: usize = 48;
const APP_NAME: &str = "tabstrip";

#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct ChromeLayout {
    pub(super) width: f32,
    pub(super) height: f32,
    pub(super) toolbar: Rect,
    pub(super) sidebar_toggle: Rect,
    pub(super) sidebar: Option<Rect>,
    pub(super) content: Rect,
    /// Left edge of the tab strip in window coordinates.
    pub(super) strip_x: f32,
    /// Horizontal scroll of the strip content (0 = first tab at the left edge).
    pub(super) scroll_x: f32,
}

impl ChromeLayout {
    pub(super) fn compute(
        m: &StripMetrics,
        width: f32,
        height: f32,
        sidebar_width: f32,
        sidebar_visible: bool,
    ) -> Self {
        let bar = m.bar_height;
        let toolbar = Rect {
            x: 0.0,
            y: 0.0,
            w: width,
            h: bar,
        };
        let sidebar_toggle = Rect {
            x: TOGGLE_MARGIN,
            y: ((bar - TOGGLE_SIZE) / 2.0).max(0.0),
            w: TOGGLE_SIZE,
            h: TOGGLE_SIZE,
        };
        let body_h = (height - bar).max(0.0);
        let sidebar_w = sidebar_width.clamp(0.0, width);

        // With the sidebar open the strip lines up with the content area.
        let (sidebar, strip_x) = if sidebar_visible {
            let rect = Rect {
                x: 0.0,
                y: bar,
                w: sidebar_w,
                h: body_h,
            };
            (Some(rect), sidebar_w.max(sidebar_toggle.right() + TOGGLE_MARGIN))
        } else {
            (None, sidebar_toggle.right() + TOGGLE_MARGIN)
        };
        let content_x = sidebar.map_or(0.0, |s| s.right());
        let content = Rect {
            x: content_x,
            y: bar,
            w: (width - content_x).max(0.0),
            h: body_h,
        };

        ChromeLayout {
            width,
            height,
            toolbar,
            sidebar_toggle,
            sidebar,
            content,
            strip_x,
            scroll_x: 0.0,
        }
    }

    pub(super) fn scrolled(self, scroll_x: f32) -> Self {
        ChromeLayout { scroll_x, ..self }
    }

    pub(super) fn strip_width(&self) -> f32 {
        (self.width - self.strip_x).max(0.0)
    }

    /// Window point to strip content coordinates, or `None` outside the toolbar strip area.
    pub(super) fn to_strip(&self, x: f32, y: f32) -> Option<(f32, f32)> {
        (x >= self.strip_x && self.toolbar.contains(x, y))
            .then(|| (x - self.strip_x + self.scroll_x, y))
    }

    /// Strip content rectangle to window coordinates.
    pub(super) fn strip_to_window(&self, rect: Rect) -> Rect {
        rect.offset_x(self.strip_x - self.scroll_x)
    }
}

/// Keeps `scroll` within `0..=content_width - strip_width`.
pub(super) fn clamp_scroll(scroll: f32, content_width: f32, strip_width: f32) -> f32 {
    let max = (content_width - strip_width).max(0.0);
    if scroll.is_nan() {
        return 0.0;
    }
    scroll.max(0.0).min(max)
}

/// Smallest scroll change that brings `target` (strip content coordinates) fully into view.
pub(super) fn reveal(scroll: f32, target: Rect, strip_width: f32) -> f32 {
    if target.x < scroll {
        target.x
    } else if target.right() > scroll + strip_width {
        target.right() - strip_width
    } else {
        scroll
    }
}

/// Cuts `text` to at most `max_columns` display columns, ending in `…` when shortened.
pub(super) fn truncate_to_width(text: &str, max_columns: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_columns {
        return text.to_string();
    }
    if max_columns == 0 {
        return String::new();
    }

    let budget = max_columns - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

pub(super) fn window_title(selected: Option<&str>) -> String {
    match selected {
        Some(title) if !title.is_empty() => truncate_to_width(title, TITLE_MAX_COLUMNS),
        _ => APP_NAME.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gui_chrome.rs"]
mod tests;
