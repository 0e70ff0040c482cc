//! Data-space to display-space mapping and axis drawing.

use crate::error::Result;
use crate::numeric::{ticks, Interval};
use crate::render::{Color, Renderer};
use crate::util::formatters::format_tick;
use crate::util::LayoutConfig;

/// An axis of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

/// A rectangle in display coordinates (origin top-left, y downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRect {
    /// Left edge.
    pub min_x: f64,
    /// Right edge.
    pub max_x: f64,
    /// Top edge.
    pub min_y: f64,
    /// Bottom edge.
    pub max_y: f64,
}

impl DisplayRect {
    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Placement of the plot area and legend on a canvas.
#[derive(Debug, Clone)]
pub struct CanvasLayout {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Where data is drawn.
    pub plot: DisplayRect,
    /// Where the legend goes, when there is one.
    pub legend: Option<DisplayRect>,
    config: LayoutConfig,
}

impl CanvasLayout {
    /// Inset the plot area by the configured margin on every side and,
    /// when `with_legend` is set, reserve a legend column on the right.
    pub fn new(width: u32, height: u32, config: &LayoutConfig, with_legend: bool) -> Self {
        let (w, h) = (width as f64, height as f64);
        let m = config.margin;
        let legend_w = if with_legend { config.legend_width * w } else { 0.0 };
        let plot = DisplayRect {
            min_x: m * w,
            max_x: (1.0 - m) * w - legend_w,
            min_y: m * h,
            max_y: (1.0 - m) * h,
        };
        let legend = with_legend.then(|| DisplayRect {
            min_x: plot.max_x + 0.03 * w,
            max_x: (1.0 - 0.02) * w,
            min_y: plot.min_y,
            max_y: plot.max_y,
        });
        Self {
            width: w,
            height: h,
            plot,
            legend,
            config: config.clone(),
        }
    }

    /// Font size for captions and labels.
    pub fn font_size(&self) -> f64 {
        self.config.font_size * (self.width + self.height)
    }

    /// Length of a tick mark.
    pub fn tick_length(&self) -> f64 {
        self.config.tick_length * (self.width + self.height)
    }

    /// Radius of point markers.
    pub fn marker_radius(&self) -> f64 {
        self.config.marker_radius * (self.width + self.height)
    }
}

/// Affine map from a data domain onto the plot area.
///
/// Data y grows upward on screen: the domain maximum lands on the top edge.
#[derive(Debug, Clone)]
pub struct CoordinateFrame {
    domain_x: Interval,
    domain_y: Interval,
    layout: CanvasLayout,
}

impl CoordinateFrame {
    /// Build a frame. Both domains must have `lo < hi`.
    pub fn new(domain_x: Interval, domain_y: Interval, layout: CanvasLayout) -> Self {
        debug_assert!(domain_x.lo < domain_x.hi && domain_y.lo < domain_y.hi);
        Self {
            domain_x,
            domain_y,
            layout,
        }
    }

    /// Domain of one axis.
    pub fn domain(&self, axis: Axis) -> Interval {
        match axis {
            Axis::X => self.domain_x,
            Axis::Y => self.domain_y,
        }
    }

    /// Canvas layout the frame draws into.
    pub fn layout(&self) -> &CanvasLayout {
        &self.layout
    }

    /// Map a data point to display coordinates.
    pub fn to_display(&self, x: f64, y: f64) -> (f64, f64) {
        (self.display_x(x), self.display_y(y))
    }

    fn display_x(&self, x: f64) -> f64 {
        let r = &self.layout.plot;
        r.min_x + self.domain_x.fraction(x) * r.width()
    }

    fn display_y(&self, y: f64) -> f64 {
        let r = &self.layout.plot;
        r.max_y - self.domain_y.fraction(y) * r.height()
    }

    /// Tick values for one axis.
    pub fn ticks(&self, axis: Axis) -> Result<Vec<f64>> {
        let d = self.domain(axis);
        ticks::plan(d.lo, d.hi)
    }

    /// Draw both axis lines, ticks with labels, and the axis captions.
    pub fn draw_axes(&self, out: &mut dyn Renderer, x_caption: &str, y_caption: &str) -> Result<()> {
        let l = &self.layout;
        let r = l.plot;
        let font = l.font_size();
        let tick = l.tick_length();
        let cfg = &l.config;

        out.line((r.min_x, r.max_y), (r.max_x, r.max_y), Color::BLACK);
        out.line((r.min_x, r.max_y), (r.min_x, r.min_y), Color::BLACK);

        for t in self.ticks(Axis::X)? {
            let x = self.display_x(t);
            out.line((x, r.max_y + tick), (x, r.max_y), Color::BLACK);
            out.text(
                (x, r.max_y + cfg.tick_caption_offset * l.height),
                &format_tick(t),
                font,
                Color::BLACK,
            );
        }
        out.text(
            (
                r.max_x + cfg.x_caption_offset.0 * l.width,
                r.max_y + cfg.x_caption_offset.1 * l.height,
            ),
            x_caption,
            font,
            Color::BLACK,
        );

        for t in self.ticks(Axis::Y)? {
            let y = self.display_y(t);
            out.line((r.min_x, y), (r.min_x - tick, y), Color::BLACK);
            out.text(
                (r.min_x - cfg.tick_caption_offset * l.width, y),
                &format_tick(t),
                font,
                Color::BLACK,
            );
        }
        out.text(
            (
                r.min_x + cfg.y_caption_offset.0 * l.width,
                r.min_y + cfg.y_caption_offset.1 * l.height,
            ),
            y_caption,
            font,
            Color::BLACK,
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Primitive, Scene};

    fn frame() -> CoordinateFrame {
        let layout = CanvasLayout::new(1000, 500, &LayoutConfig::default(), false);
        CoordinateFrame::new(Interval::new(0.0, 10.0), Interval::new(-1.0, 1.0), layout)
    }

    #[test]
    fn plot_area_is_inset_by_ten_percent() {
        let l = CanvasLayout::new(1000, 500, &LayoutConfig::default(), false);
        assert_eq!(
            l.plot,
            DisplayRect {
                min_x: 100.0,
                max_x: 900.0,
                min_y: 50.0,
                max_y: 450.0
            }
        );
        assert!(l.legend.is_none());
    }

    #[test]
    fn legend_column_sits_right_of_the_plot() {
        let l = CanvasLayout::new(1000, 500, &LayoutConfig::default(), true);
        let legend = l.legend.unwrap();
        assert_eq!(l.plot.max_x, 700.0);
        assert!(legend.min_x > l.plot.max_x);
        assert!(legend.max_x <= 1000.0);
    }

    #[test]
    fn corners_map_to_plot_corners_with_y_up() {
        let f = frame();
        assert_eq!(f.to_display(0.0, -1.0), (100.0, 450.0));
        assert_eq!(f.to_display(10.0, 1.0), (900.0, 50.0));
        assert_eq!(f.to_display(5.0, 0.0), (500.0, 250.0));
    }

    #[test]
    fn larger_y_is_higher_on_screen() {
        let f = frame();
        assert!(f.to_display(0.0, 0.5).1 < f.to_display(0.0, 0.4).1);
    }

    #[test]
    fn sizes_scale_with_canvas() {
        let small = CanvasLayout::new(400, 300, &LayoutConfig::default(), true);
        let big = CanvasLayout::new(800, 600, &LayoutConfig::default(), true);
        assert_eq!(big.font_size(), 2.0 * small.font_size());
        assert!((small.font_size() - 5.6).abs() < 1e-9);
    }

    #[test]
    fn axes_label_every_tick() {
        let f = frame();
        let mut scene = Scene::new(1000, 500);
        f.draw_axes(&mut scene, "time", "value").unwrap();

        let labels: Vec<&str> = scene.texts().collect();
        let x_ticks = f.ticks(Axis::X).unwrap();
        let y_ticks = f.ticks(Axis::Y).unwrap();
        assert_eq!(labels.len(), x_ticks.len() + y_ticks.len() + 2);
        assert!(labels.contains(&"time"));
        assert!(labels.contains(&"value"));
        assert!(labels.contains(&"10"));

        let lines = scene
            .primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Line { .. }))
            .count();
        assert_eq!(lines, 2 + x_ticks.len() + y_ticks.len());
    }
}
