//! Color mapping functions for density plots.

use crate::render::Color;
use clap::ValueEnum;

/// Number of entries in a [`ColorRamp`].
pub const RAMP_SIZE: usize = 256;

/// Color palette for density visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorPalette {
    /// Viridis colormap (perceptually uniform, colorblind-friendly).
    #[default]
    Viridis,
    /// Plasma colormap (perceptually uniform).
    Plasma,
    /// Rainbow/Spectral colormap (traditional, high contrast).
    Rainbow,
    /// Blue-White-Red diverging colormap.
    #[value(alias = "bluered")]
    BlueRed,
}

impl ColorPalette {
    /// Get palette name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Viridis => "viridis",
            Self::Plasma => "plasma",
            Self::Rainbow => "rainbow",
            Self::BlueRed => "blue-red",
        }
    }

    /// Map a normalized value (0.0 to 1.0) to an RGB color.
    pub fn color(self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Viridis => viridis_color(t),
            Self::Plasma => plasma_color(t),
            Self::Rainbow => rainbow_color(t),
            Self::BlueRed => bluered_color(t),
        }
    }
}

/// A fixed 256-entry lookup table sampled from a palette.
#[derive(Debug, Clone)]
pub struct ColorRamp {
    entries: [Color; RAMP_SIZE],
}

impl ColorRamp {
    /// Sample `palette` at 256 evenly spaced points.
    pub fn new(palette: ColorPalette) -> Self {
        let mut entries = [Color::BLACK; RAMP_SIZE];
        for (i, entry) in entries.iter_mut().enumerate() {
            *entry = palette.color(i as f64 / (RAMP_SIZE - 1) as f64);
        }
        Self { entries }
    }

    /// Entry at `index`, saturating at the last one.
    pub fn get(&self, index: usize) -> Color {
        self.entries[index.min(RAMP_SIZE - 1)]
    }

    /// Entry for `v` inside `[lo, hi]`, rounded to the nearest index.
    pub fn map(&self, v: f64, lo: f64, hi: f64) -> Color {
        let t = ((v - lo) / (hi - lo)).clamp(0.0, 1.0);
        self.get((t * (RAMP_SIZE - 1) as f64).round() as usize)
    }
}

/// Viridis colormap approximation.
fn viridis_color(t: f64) -> Color {
    // Simplified viridis palette using piecewise linear interpolation
    let r = if t < 0.5 {
        68.0 + t * 2.0 * (33.0 - 68.0)
    } else {
        33.0 + (t - 0.5) * 2.0 * (253.0 - 33.0)
    };

    let g = if t < 0.5 {
        1.0 + t * 2.0 * (104.0 - 1.0)
    } else {
        104.0 + (t - 0.5) * 2.0 * (231.0 - 104.0)
    };

    let b = if t < 0.5 {
        84.0 + t * 2.0 * (109.0 - 84.0)
    } else {
        109.0 + (t - 0.5) * 2.0 * (37.0 - 109.0)
    };

    Color::rgb(r as u8, g as u8, b as u8)
}

/// Plasma colormap approximation.
fn plasma_color(t: f64) -> Color {
    let r = if t < 0.5 {
        13.0 + t * 2.0 * (180.0 - 13.0)
    } else {
        180.0 + (t - 0.5) * 2.0 * (240.0 - 180.0)
    };

    let g = if t < 0.5 {
        8.0 + t * 2.0 * (54.0 - 8.0)
    } else {
        54.0 + (t - 0.5) * 2.0 * (175.0 - 54.0)
    };

    let b = if t < 0.5 {
        135.0 + t * 2.0 * (121.0 - 135.0)
    } else {
        121.0 + (t - 0.5) * 2.0 * (12.0 - 121.0)
    };

    Color::rgb(r as u8, g as u8, b as u8)
}

/// Rainbow colormap: hue sweeps from 240° (blue) down to 0° (red).
fn rainbow_color(t: f64) -> Color {
    let h = (1.0 - t) * 240.0;
    let x = 1.0 - ((h / 60.0) % 2.0 - 1.0).abs();

    let (r, g, b) = if h < 60.0 {
        (1.0, x, 0.0)
    } else if h < 120.0 {
        (x, 1.0, 0.0)
    } else if h < 180.0 {
        (0.0, 1.0, x)
    } else {
        (0.0, x, 1.0)
    };

    Color::rgb(
        (r * 255.0) as u8,
        (g * 255.0) as u8,
        (b * 255.0) as u8,
    )
}

/// Blue-White-Red diverging colormap.
fn bluered_color(t: f64) -> Color {
    if t < 0.5 {
        // Blue to white
        let t2 = t * 2.0;
        Color::rgb((t2 * 255.0) as u8, (t2 * 255.0) as u8, 255)
    } else {
        // White to red
        let t2 = (t - 0.5) * 2.0;
        let fade = ((1.0 - t2) * 255.0) as u8;
        Color::rgb(255, fade, fade)
    }
}
