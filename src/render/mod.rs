//! Drawing primitives and output backends.
//!
//! Plot drivers never touch pixels. They issue primitives in display
//! coordinates (origin top-left, y growing downward) through the
//! [`Renderer`] trait, normally into a [`Scene`] that is later replayed into
//! the PNG or terminal backend.

pub mod png;
pub mod terminal;

use crate::error::{PlotError, Result};

/// Largest accepted canvas width or height, in pixels.
pub const MAX_CANVAS_SIDE: u32 = 16_384;

/// Reject canvases with no pixels or with a side above [`MAX_CANVAS_SIDE`].
pub fn check_canvas(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(PlotError::invalid_parameter(
            "canvas",
            format!("{}x{} has no pixels", width, height),
        ));
    }
    if width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
        return Err(PlotError::invalid_parameter(
            "canvas",
            format!("{}x{} exceeds {} pixels per side", width, height, MAX_CANVAS_SIDE),
        ));
    }
    Ok(())
}

/// A packed `0xRRGGBB` colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Black.
    pub const BLACK: Color = Color(0x000000);
    /// White.
    pub const WHITE: Color = Color(0xFFFFFF);

    /// Pack three channels.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Red channel.
    pub fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub fn b(self) -> u8 {
        self.0 as u8
    }
}

/// Sink for drawing primitives.
pub trait Renderer {
    /// Straight one-pixel segment.
    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Color);

    /// Filled axis-aligned rectangle between two corners.
    fn rect(&mut self, corner: (f64, f64), opposite: (f64, f64), color: Color);

    /// Filled circle, used as a point marker.
    fn circle(&mut self, center: (f64, f64), radius: f64, color: Color);

    /// Connected segments through `points`.
    fn polyline(&mut self, points: &[(f64, f64)], color: Color);

    /// Text with its baseline starting at `at`.
    fn text(&mut self, at: (f64, f64), text: &str, size: f64, color: Color);
}

/// One recorded primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// See [`Renderer::line`].
    Line {
        /// Start point.
        from: (f64, f64),
        /// End point.
        to: (f64, f64),
        /// Stroke colour.
        color: Color,
    },
    /// See [`Renderer::rect`].
    Rect {
        /// First corner.
        corner: (f64, f64),
        /// Opposite corner.
        opposite: (f64, f64),
        /// Fill colour.
        color: Color,
    },
    /// See [`Renderer::circle`].
    Circle {
        /// Centre.
        center: (f64, f64),
        /// Radius in pixels.
        radius: f64,
        /// Fill colour.
        color: Color,
    },
    /// See [`Renderer::polyline`].
    Polyline {
        /// Vertices in order.
        points: Vec<(f64, f64)>,
        /// Stroke colour.
        color: Color,
    },
    /// See [`Renderer::text`].
    Text {
        /// Baseline start.
        at: (f64, f64),
        /// Content.
        text: String,
        /// Font size in pixels.
        size: f64,
        /// Text colour.
        color: Color,
    },
}

/// An in-memory drawing of a whole canvas.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Primitives in drawing order.
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// Create an empty scene for a `width × height` canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            primitives: Vec::new(),
        }
    }

    /// Replay every primitive, in order, into `target`.
    pub fn replay(&self, target: &mut dyn Renderer) {
        for p in &self.primitives {
            match p {
                Primitive::Line { from, to, color } => target.line(*from, *to, *color),
                Primitive::Rect {
                    corner,
                    opposite,
                    color,
                } => target.rect(*corner, *opposite, *color),
                Primitive::Circle {
                    center,
                    radius,
                    color,
                } => target.circle(*center, *radius, *color),
                Primitive::Polyline { points, color } => target.polyline(points, *color),
                Primitive::Text {
                    at,
                    text,
                    size,
                    color,
                } => target.text(*at, text, *size, *color),
            }
        }
    }

    /// Iterate over the recorded text strings.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Renderer for Scene {
    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Color) {
        self.primitives.push(Primitive::Line { from, to, color });
    }

    fn rect(&mut self, corner: (f64, f64), opposite: (f64, f64), color: Color) {
        self.primitives.push(Primitive::Rect {
            corner,
            opposite,
            color,
        });
    }

    fn circle(&mut self, center: (f64, f64), radius: f64, color: Color) {
        self.primitives.push(Primitive::Circle {
            center,
            radius,
            color,
        });
    }

    fn polyline(&mut self, points: &[(f64, f64)], color: Color) {
        self.primitives.push(Primitive::Polyline {
            points: points.to_vec(),
            color,
        });
    }

    fn text(&mut self, at: (f64, f64), text: &str, size: f64, color: Color) {
        self.primitives.push(Primitive::Text {
            at,
            text: text.to_string(),
            size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_channels() {
        let c = Color::rgb(0x12, 0x34, 0x56);
        assert_eq!(c, Color(0x123456));
        assert_eq!((c.r(), c.g(), c.b()), (0x12, 0x34, 0x56));
    }

    #[test]
    fn replay_preserves_order() {
        let mut scene = Scene::new(10, 10);
        scene.line((0.0, 0.0), (1.0, 1.0), Color::BLACK);
        scene.text((2.0, 2.0), "hi", 8.0, Color::BLACK);
        scene.circle((3.0, 3.0), 1.0, Color::WHITE);

        let mut copy = Scene::new(10, 10);
        scene.replay(&mut copy);
        assert_eq!(copy.primitives, scene.primitives);
        assert_eq!(copy.texts().collect::<Vec<_>>(), vec!["hi"]);
    }
}
