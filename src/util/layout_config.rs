//! Layout proportions for the plot canvas.
//!
//! Every distance is a fraction of the canvas width, height or their sum, so
//! text and ticks keep their relative placement when the canvas is resized.

/// Canvas-relative layout configuration.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Inset of the plot area on every side, as a fraction of the canvas side.
    pub margin: f64,
    /// Width reserved right of the plot area for the legend (fraction of width).
    pub legend_width: f64,
    /// Font size as a fraction of `width + height`.
    pub font_size: f64,
    /// Tick mark length as a fraction of `width + height`.
    pub tick_length: f64,
    /// Tick caption distance from the axis, as a fraction of the canvas side.
    pub tick_caption_offset: f64,
    /// X-axis caption offset from the axis end `(dx / width, dy / height)`.
    pub x_caption_offset: (f64, f64),
    /// Y-axis caption offset from the axis top `(dx / width, dy / height)`.
    pub y_caption_offset: (f64, f64),
    /// Point marker radius as a fraction of `width + height`.
    pub marker_radius: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: 0.1,
            legend_width: 0.2,
            font_size: 0.008,
            tick_length: 0.002,
            tick_caption_offset: 0.05,
            x_caption_offset: (0.01, 0.0),
            y_caption_offset: (-0.01, -0.03),
            marker_radius: 0.0022,
        }
    }
}
