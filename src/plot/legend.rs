//! Legend column drawn to the right of the plot area.

use super::frame::{CanvasLayout, DisplayRect};
use crate::render::{Color, Renderer};
use crate::util::formatters::format_tick;
use crate::util::ColorRamp;
use unicode_width::UnicodeWidthChar;

/// Average glyph advance relative to the font size.
const GLYPH_ASPECT: f64 = 0.6;
/// Strips in a drawn colour bar.
const BAR_STEPS: usize = 64;
/// Rows of height a colour bar takes.
const BAR_ROWS: usize = 8;

#[derive(Debug, Clone)]
enum Entry {
    Swatch { label: String, color: Color },
    Note(String),
    ColorBar { ramp: ColorRamp, lo: f64, hi: f64 },
}

/// Rows of legend content, laid out top to bottom.
#[derive(Debug, Clone, Default)]
pub struct Legend {
    entries: Vec<Entry>,
}

impl Legend {
    /// Empty legend.
    pub fn new() -> Self {
        Self::default()
    }

    /// A coloured square followed by `label`.
    pub fn swatch(&mut self, label: impl Into<String>, color: Color) -> &mut Self {
        self.entries.push(Entry::Swatch {
            label: label.into(),
            color,
        });
        self
    }

    /// A line of plain text.
    pub fn note(&mut self, text: impl Into<String>) -> &mut Self {
        self.entries.push(Entry::Note(text.into()));
        self
    }

    /// A vertical ramp from `lo` (bottom) to `hi` (top).
    pub fn color_bar(&mut self, ramp: ColorRamp, lo: f64, hi: f64) -> &mut Self {
        self.entries.push(Entry::ColorBar { ramp, lo, hi });
        self
    }

    /// Draw into the legend column of `layout`. Does nothing when the
    /// layout has no legend column. Rows that do not fit are dropped.
    pub fn draw(&self, out: &mut dyn Renderer, layout: &CanvasLayout) {
        let Some(rect) = layout.legend else {
            return;
        };
        let font = layout.font_size();
        let row = 2.0 * font;
        let pad = font / 2.0;

        outline(out, &rect);

        let mut y = rect.min_y + pad;
        for entry in &self.entries {
            match entry {
                Entry::Swatch { label, color } => {
                    if y + row > rect.max_y {
                        break;
                    }
                    let x = rect.min_x + pad;
                    out.rect((x, y + pad), (x + font, y + pad + font), *color);
                    let text_x = x + 2.0 * font;
                    let label = fit(label, rect.max_x - pad - text_x, font);
                    out.text((text_x, y + row - pad), &label, font, Color::BLACK);
                    y += row;
                }
                Entry::Note(text) => {
                    if y + row > rect.max_y {
                        break;
                    }
                    let x = rect.min_x + pad;
                    let text = fit(text, rect.max_x - pad - x, font);
                    out.text((x, y + row - pad), &text, font, Color::BLACK);
                    y += row;
                }
                Entry::ColorBar { ramp, lo, hi } => {
                    let height = BAR_ROWS as f64 * row;
                    if y + height + row > rect.max_y {
                        break;
                    }
                    let x = rect.min_x + pad;
                    draw_bar(out, ramp, (x, y + pad), (x + 2.0 * font, y + height - pad));
                    let text_x = x + 3.0 * font;
                    out.text((text_x, y + pad + font), &format_tick(*hi), font, Color::BLACK);
                    out.text((text_x, y + height - pad), &format_tick(*lo), font, Color::BLACK);
                    y += height;
                }
            }
        }
    }
}

fn outline(out: &mut dyn Renderer, r: &DisplayRect) {
    out.line((r.min_x, r.min_y), (r.max_x, r.min_y), Color::BLACK);
    out.line((r.max_x, r.min_y), (r.max_x, r.max_y), Color::BLACK);
    out.line((r.max_x, r.max_y), (r.min_x, r.max_y), Color::BLACK);
    out.line((r.min_x, r.max_y), (r.min_x, r.min_y), Color::BLACK);
}

/// Ramp strips from the bottom edge (first entry) to the top edge (last).
fn draw_bar(out: &mut dyn Renderer, ramp: &ColorRamp, top_left: (f64, f64), bottom_right: (f64, f64)) {
    let (x0, y0) = top_left;
    let (x1, y1) = bottom_right;
    let strip = (y1 - y0) / BAR_STEPS as f64;
    for i in 0..BAR_STEPS {
        let t = i as f64 / (BAR_STEPS - 1) as f64;
        let bottom = y1 - i as f64 * strip;
        out.rect((x0, bottom - strip), (x1, bottom), ramp.map(t, 0.0, 1.0));
    }
}

/// Shorten `text` to the display columns that fit in `width` pixels.
fn fit(text: &str, width: f64, font: f64) -> String {
    let columns = (width / (GLYPH_ASPECT * font)).floor().max(0.0) as usize;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > columns {
            if columns > 0 {
                // Make room for the ellipsis.
                while used + 1 > columns {
                    match out.pop() {
                        Some(last) => used -= last.width().unwrap_or(0),
                        None => break,
                    }
                }
                out.push('…');
            }
            return out;
        }
        used += w;
        out.push(c);
    }
    out
}
