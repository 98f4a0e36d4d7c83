//! Software painting into the softbuffer frame.

use crate::config::{Color, ThemePalette};
use crate::core::TabBarSnapshot;
use crate::core::layout::Rect;

use super::chrome::ChromeLayout;
use super::text::TextRenderer;

/// Borrowed `0x00RRGGBB` frame with a logical-to-physical scale.
pub(super) struct Painter<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    scale: f32,
}

impl<'a> Painter<'a> {
    pub(super) fn new(buffer: &'a mut [u32], width: usize, height: usize, scale: f32) -> Self {
        Painter {
            buffer,
            width,
            height,
            scale,
        }
    }

    pub(super) fn clear(&mut self, color: Color) {
        self.buffer.fill(color.to_pixel());
    }

    pub(super) fn scale(&self) -> f32 {
        self.scale
    }

    /// Physical pixel bounds of `rect`, clipped to the frame and to `clip_x0..`.
    pub(super) fn span(&self, rect: Rect, clip_x0: f32) -> Option<(usize, usize, usize, usize)> {
        let s = self.scale;
        let x0 = (rect.x.max(clip_x0) * s).round().max(0.0) as usize;
        let y0 = (rect.y * s).round().max(0.0) as usize;
        let x1 = ((rect.right() * s).round().max(0.0) as usize).min(self.width);
        let y1 = (((rect.y + rect.h) * s).round().max(0.0) as usize).min(self.height);
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }

    pub(super) fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill_rect_clipped(rect, 0.0, color);
    }

    /// Fills `rect`, dropping everything left of `clip_x0` (logical).
    pub(super) fn fill_rect_clipped(&mut self, rect: Rect, clip_x0: f32, color: Color) {
        let Some((x0, y0, x1, y1)) = self.span(rect, clip_x0) else {
            return;
        };
        let pixel = color.to_pixel();
        for row in y0..y1 {
            let start = row * self.width;
            self.buffer[start + x0..start + x1].fill(pixel);
        }
    }

    pub(super) fn stroke_rect(&mut self, rect: Rect, thickness: f32, clip_x0: f32, color: Color) {
        let t = thickness;
        let edges = [
            Rect { h: t, ..rect },
            Rect {
                y: rect.y + rect.h - t,
                h: t,
                ..rect
            },
            Rect { w: t, ..rect },
            Rect {
                x: rect.right() - t,
                w: t,
                ..rect
            },
        ];
        for edge in edges {
            self.fill_rect_clipped(edge, clip_x0, color);
        }
    }

    /// Blends `color` over the physical pixel `(x, y)` with coverage `alpha`,
    /// if it lies inside `bounds` (as returned by [`Painter::span`]).
    pub(super) fn blend(
        &mut self,
        x: i32,
        y: i32,
        bounds: (usize, usize, usize, usize),
        color: Color,
        alpha: u8,
    ) {
        let (x0, y0, x1, y1) = bounds;
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < x0 || x >= x1 || y < y0 || y >= y1 {
            return;
        }
        let idx = y * self.width + x;
        let a = alpha as u32;
        let inv_a = 255 - a;
        let bg = self.buffer[idx];
        let mix = |fg: u8, shift: u32| (fg as u32 * a + ((bg >> shift) & 0xFF) * inv_a) / 255;
        self.buffer[idx] = (mix(color.r, 16) << 16) | (mix(color.g, 8) << 8) | mix(color.b, 0);
    }

    /// Draws a `+` glyph centered in `rect`.
    pub(super) fn plus(&mut self, rect: Rect, clip_x0: f32, color: Color) {
        let arm = rect.w * 0.5;
        let t = (rect.w / 8.0).max(1.0);
        let cx = rect.center_x();
        let cy = rect.y + rect.h / 2.0;
        let horizontal = Rect {
            x: cx - arm / 2.0,
            y: cy - t / 2.0,
            w: arm,
            h: t,
        };
        let vertical = Rect {
            x: cx - t / 2.0,
            y: cy - arm / 2.0,
            w: t,
            h: arm,
        };
        self.fill_rect_clipped(horizontal, clip_x0, color);
        self.fill_rect_clipped(vertical, clip_x0, color);
    }

    /// Draws an `×` glyph centered in `rect`.
    pub(super) fn cross(&mut self, rect: Rect, clip_x0: f32, color: Color) {
        let Some((x0, y0, x1, y1)) = self.span(rect, clip_x0) else {
            return;
        };
        let inset = ((x1 - x0) / 4).max(1);
        let size = (x1 - x0).min(y1 - y0).saturating_sub(2 * inset);
        let (ox, oy) = (x0 + inset, y0 + inset);
        let pixel = color.to_pixel();
        for i in 0..size {
            let row = oy + i;
            if row >= self.height {
                break;
            }
            for col in [ox + i, ox + size - 1 - i] {
                if col < x1 && col < self.width {
                    self.buffer[row * self.width + col] = pixel;
                }
            }
        }
    }
}

pub(super) fn paint_frame(
    painter: &mut Painter<'_>,
    chrome: &ChromeLayout,
    snapshot: &TabBarSnapshot,
    palette: &ThemePalette,
    mut text: Option<&mut TextRenderer>,
) {
    painter.clear(palette.content_bg);
    painter.fill_rect(chrome.toolbar, palette.bar_bg);
    if let Some(sidebar) = chrome.sidebar {
        painter.fill_rect(sidebar, palette.sidebar_bg);
        let divider = Rect {
            x: sidebar.right() - 1.0,
            w: 1.0,
            ..sidebar
        };
        painter.fill_rect(divider, palette.divider);
    }
    paint_sidebar_toggle(painter, chrome.sidebar_toggle, palette);

    let clip = chrome.strip_x;
    let to_window = |r: Rect| chrome.strip_to_window(r);

    // Lifted tab is painted last so it stays above the neighbours it overlaps.
    for tab in snapshot.draw_order() {
        let frame = to_window(tab.frame);
        let fill = if tab.selected {
            palette.selected_tab_bg
        } else {
            palette.tab_bg
        };
        painter.fill_rect_clipped(frame, clip, fill);
        if let Some(text) = text.as_deref_mut() {
            let color = if tab.selected {
                palette.selected_tab_title
            } else {
                palette.tab_title
            };
            text.draw_label(painter, to_window(tab.title_rect), clip, &tab.title, color);
        }
        if tab.lifted {
            painter.stroke_rect(frame, 1.0, clip, palette.lifted_tab_border);
        }
        painter.cross(to_window(tab.close_button), clip, palette.close_button);
    }
    painter.plus(to_window(snapshot.plus_button), clip, palette.plus_button);
}

fn paint_sidebar_toggle(painter: &mut Painter<'_>, rect: Rect, palette: &ThemePalette) {
    let icon = Rect {
        x: rect.x + 4.0,
        y: rect.y + 6.0,
        w: rect.w - 8.0,
        h: rect.h - 12.0,
    };
    painter.stroke_rect(icon, 1.0, 0.0, palette.sidebar_toggle);
    let pane = Rect {
        w: icon.w / 3.0,
        ..icon
    };
    painter.fill_rect(pane, palette.sidebar_toggle);
}

#[cfg(test)]
#[path = "../../tests/unit/gui_render.rs"]
mod tests;
