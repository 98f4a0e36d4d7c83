//! Tab title labels rasterized with fontdue.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use fontdue::Font;

use crate::config::Color;
use crate::core::layout::Rect;

use super::render::Painter;

struct GlyphBitmap {
    data: Vec<u8>,
    width: usize,
    height: usize,
    left: i32,
    /// Distance from the baseline up to the bitmap's top row.
    top: i32,
    /// Physical pixels.
    advance: f32,
}

/// Draws single-line labels, caching glyphs per physical pixel size.
pub(super) struct TextRenderer {
    font: Font,
    /// Logical pixels.
    size: f32,
    glyph_cache: HashMap<(char, u32), GlyphBitmap>,
}

impl TextRenderer {
    pub(super) fn new(font: Font, size: f32) -> Self {
        TextRenderer {
            font,
            size,
            glyph_cache: HashMap::new(),
        }
    }

    fn ellipsis(&self) -> &'static str {
        if self.font.has_glyph('…') { "…" } else { "..." }
    }

    /// Draws `text` left-aligned and vertically centred in `area`, shortened
    /// with an ellipsis to fit. Nothing lands outside `area` or left of `clip_x0`.
    pub(super) fn draw_label(
        &mut self,
        painter: &mut Painter<'_>,
        area: Rect,
        clip_x0: f32,
        text: &str,
        color: Color,
    ) {
        let label = fit_title(text, area.w, self.ellipsis(), |c| {
            self.font.metrics(c, self.size).advance_width
        });
        if label.is_empty() {
            return;
        }
        let Some(bounds) = painter.span(area, clip_x0) else {
            return;
        };

        let scale = painter.scale();
        let px = self.size * scale;
        let (ascent, descent) = self
            .font
            .horizontal_line_metrics(px)
            .map_or((px * 0.8, -px * 0.2), |m| (m.ascent, m.descent));
        let line_top = area.y * scale + (area.h * scale - (ascent - descent)) / 2.0;
        let baseline = (line_top + ascent).round() as i32;

        let mut pen_x = area.x * scale;
        for ch in label.chars() {
            let glyph = self.glyph(ch, px);
            let origin_x = pen_x.round() as i32 + glyph.left;
            let origin_y = baseline - glyph.top;
            for gy in 0..glyph.height {
                for gx in 0..glyph.width {
                    let alpha = glyph.data[gy * glyph.width + gx];
                    if alpha == 0 {
                        continue;
                    }
                    painter.blend(
                        origin_x + gx as i32,
                        origin_y + gy as i32,
                        bounds,
                        color,
                        alpha,
                    );
                }
            }
            pen_x += glyph.advance;
        }
    }

    fn glyph(&mut self, ch: char, px: f32) -> &GlyphBitmap {
        match self.glyph_cache.entry((ch, px.to_bits())) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let (metrics, data) = self.font.rasterize(ch, px);
                entry.insert(GlyphBitmap {
                    data,
                    width: metrics.width,
                    height: metrics.height,
                    left: metrics.xmin,
                    top: metrics.height as i32 + metrics.ymin,
                    advance: metrics.advance_width,
                })
            }
        }
    }
}

/// Shortens `text` so its advances sum to at most `max_width`, ending in
/// `ellipsis` when cut. Empty when not even the ellipsis fits.
pub(super) fn fit_title(
    text: &str,
    max_width: f32,
    ellipsis: &str,
    mut advance: impl FnMut(char) -> f32,
) -> String {
    let total: f32 = text.chars().map(&mut advance).sum();
    if total <= max_width {
        return text.to_string();
    }
    let budget = max_width - ellipsis.chars().map(&mut advance).sum::<f32>();
    if budget < 0.0 {
        return String::new();
    }

    let mut used = 0.0;
    let mut out = String::new();
    for c in text.chars() {
        let w = advance(c);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    let mut out = out.trim_end().to_string();
    out.push_str(ellipsis);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/gui_text.rs"]
mod tests;
