//! Pure layout math for the tab strip.
//!
//! Every function in this module is a pure calculation: given metrics and
//! counts it returns coordinates and sizes in strip-local logical pixels
//! (origin at the strip's top-left corner). No drawing, no side effects.

// ── Defaults ─────────────────────────────────────────────────────────

/// Width a tab takes when the strip is not width-constrained.
pub const MAX_TAB_WIDTH: f32 = 150.0;

/// Narrowest a tab may get when many tabs share the strip.
pub const MIN_TAB_WIDTH: f32 = 60.0;

pub const TAB_HEIGHT: f32 = 28.0;

/// Horizontal gap between neighbouring tabs.
pub const TAB_SPACING: f32 = 4.0;

/// Inset from the strip's leading edge to the first tab.
pub const STRIP_PADDING: f32 = 8.0;

/// Vertical inset from the top of the bar to the tabs.
pub const TAB_TOP_INSET: f32 = 4.0;

pub const BAR_HEIGHT: f32 = 36.0;

pub const PLUS_BUTTON_SIZE: f32 = 24.0;

pub const CLOSE_BUTTON_SIZE: f32 = 16.0;

/// Horizontal padding inside a tab (title and close button).
pub const TAB_PADDING_H: f32 = 12.0;

// ── Helper types ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Same rectangle shifted horizontally by `dx`.
    pub fn offset_x(self, dx: f32) -> Rect {
        Rect {
            x: self.x + dx,
            ..self
        }
    }
}

/// `value` when it is a usable length (finite, not negative), else `fallback`.
pub(crate) fn length_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        fallback
    }
}

/// Explicit geometry for one strip. Replaces per-view literals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripMetrics {
    pub max_tab_width: f32,
    pub min_tab_width: f32,
    pub tab_height: f32,
    pub tab_spacing: f32,
    pub strip_padding: f32,
    pub tab_top_inset: f32,
    pub bar_height: f32,
    pub plus_button_size: f32,
    pub close_button_size: f32,
    pub tab_padding_h: f32,
}

impl StripMetrics {
    /// Usable `(min, max)` tab width bounds. Non-finite or negative values fall
    /// back to the defaults and an inverted range collapses onto `max`.
    pub fn width_bounds(&self) -> (f32, f32) {
        let max = length_or(self.max_tab_width, MAX_TAB_WIDTH);
        let min = length_or(self.min_tab_width, MIN_TAB_WIDTH.min(max));
        (min.min(max), max)
    }
}

impl Default for StripMetrics {
    fn default() -> Self {
        Self {
            max_tab_width: MAX_TAB_WIDTH,
            min_tab_width: MIN_TAB_WIDTH,
            tab_height: TAB_HEIGHT,
            tab_spacing: TAB_SPACING,
            strip_padding: STRIP_PADDING,
            tab_top_inset: TAB_TOP_INSET,
            bar_height: BAR_HEIGHT,
            plus_button_size: PLUS_BUTTON_SIZE,
            close_button_size: CLOSE_BUTTON_SIZE,
            tab_padding_h: TAB_PADDING_H,
        }
    }
}

/// Metrics resolved against a concrete tab width: the slot grid the reorder
/// engine measures crossings against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotGeometry {
    pub metrics: StripMetrics,
    pub tab_width: f32,
}

impl SlotGeometry {
    pub fn new(metrics: StripMetrics, tab_count: usize, strip_width: Option<f32>) -> Self {
        Self {
            metrics,
            tab_width: tab_width(&metrics, tab_count, strip_width),
        }
    }

    pub fn origin_x(&self, index: usize) -> f32 {
        tab_origin_x(&self.metrics, index, self.tab_width)
    }

    pub fn center_x(&self, index: usize) -> f32 {
        tab_center_x(&self.metrics, index, self.tab_width)
    }

    pub fn rect(&self, index: usize) -> Rect {
        tab_rect(&self.metrics, index, self.tab_width)
    }
}

/// What lies under a point in the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripHit {
    Tab(usize),
    CloseTab(usize),
    NewTab,
    Empty,
}

// ── Layout functions ─────────────────────────────────────────────────

/// Width reserved for the plus button and its gap after the last tab.
pub fn plus_button_reserved_width(m: &StripMetrics) -> f32 {
    m.plus_button_size + m.tab_spacing * 2.0
}

/// Computes the uniform tab width.
///
/// With no width constraint every tab gets the maximum width. Otherwise the
/// available width is shared evenly and kept within [`StripMetrics::width_bounds`];
/// past the minimum the content is wider than the strip and the host scrolls it.
pub fn tab_width(m: &StripMetrics, tab_count: usize, strip_width: Option<f32>) -> f32 {
    let (min, max) = m.width_bounds();
    let Some(strip_width) = strip_width else {
        return max;
    };
    let available = (strip_width - m.strip_padding * 2.0 - plus_button_reserved_width(m)).max(0.0);
    let count = tab_count.max(1) as f32;
    let per_tab = available / count - m.tab_spacing;
    // `f32::max` drops a NaN operand, so a NaN strip width lands on `min`.
    per_tab.max(min).min(max)
}

/// Distance between the origins of two adjacent slots.
pub fn slot_advance(m: &StripMetrics, tab_width: f32) -> f32 {
    tab_width + m.tab_spacing
}

/// Returns the x-origin of the slot at `index`.
pub fn tab_origin_x(m: &StripMetrics, index: usize, tab_width: f32) -> f32 {
    m.strip_padding + index as f32 * slot_advance(m, tab_width)
}

/// Returns the resting (un-shifted) horizontal center of the slot at `index`.
pub fn tab_center_x(m: &StripMetrics, index: usize, tab_width: f32) -> f32 {
    tab_origin_x(m, index, tab_width) + tab_width / 2.0
}

pub fn tab_rect(m: &StripMetrics, index: usize, tab_width: f32) -> Rect {
    Rect {
        x: tab_origin_x(m, index, tab_width),
        y: m.tab_top_inset,
        w: tab_width,
        h: m.tab_height,
    }
}

/// Close button inside a tab whose frame is `tab`, right-aligned and vertically centred.
pub fn close_button_rect(m: &StripMetrics, tab: Rect) -> Rect {
    let size = m.close_button_size;
    Rect {
        x: tab.right() - m.tab_padding_h - size,
        y: tab.y + (tab.h - size) / 2.0,
        w: size,
        h: size,
    }
}

/// Label area of a tab: inside the horizontal padding, stopping short of the
/// close button. Zero width when the tab is too narrow for a label.
pub fn title_rect(m: &StripMetrics, tab: Rect) -> Rect {
    let x = tab.x + m.tab_padding_h;
    let right = close_button_rect(m, tab).x - m.tab_padding_h / 2.0;
    Rect {
        x,
        y: tab.y,
        w: (right - x).max(0.0),
        h: tab.h,
    }
}

/// Plus button placed in the slot after the last tab.
pub fn plus_button_rect(m: &StripMetrics, tab_count: usize, tab_width: f32) -> Rect {
    let size = m.plus_button_size;
    Rect {
        x: tab_origin_x(m, tab_count, tab_width),
        y: (m.bar_height - size) / 2.0,
        w: size,
        h: size,
    }
}

/// Total width the strip content needs (tabs plus trailing padding and plus button).
pub fn content_width(m: &StripMetrics, tab_count: usize, tab_width: f32) -> f32 {
    tab_origin_x(m, tab_count, tab_width) + plus_button_reserved_width(m) + m.strip_padding
}

/// Hit-tests resting slots (no drag offsets applied).
pub fn hit_test(m: &StripMetrics, x: f32, y: f32, tab_count: usize, tab_width: f32) -> StripHit {
    if y < 0.0 || y >= m.bar_height {
        return StripHit::Empty;
    }
    if plus_button_rect(m, tab_count, tab_width).contains(x, y) {
        return StripHit::NewTab;
    }
    if x < m.strip_padding {
        return StripHit::Empty;
    }
    let index = ((x - m.strip_padding) / slot_advance(m, tab_width)) as usize;
    if index >= tab_count {
        return StripHit::Empty;
    }
    let tab = tab_rect(m, index, tab_width);
    if !tab.contains(x, y) {
        // Spacing gap or above/below the tab body.
        return StripHit::Empty;
    }
    if close_button_rect(m, tab).contains(x, y) {
        return StripHit::CloseTab(index);
    }
    StripHit::Tab(index)
}

#[cfg(test)]
#[path = "../../tests/unit/core_layout.rs"]
mod tests;
