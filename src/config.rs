//! Resolved options for one plot invocation.

use crate::numeric::Aggregation;
use crate::util::colors::DEFAULT_SEED;
use crate::util::{ColorPalette, LayoutConfig};
use clap::ValueEnum;
use std::path::PathBuf;

/// Blur passes for density plots when none is given.
pub const DEFAULT_DENSITY_BLUR: usize = 32;
/// Grid side length when none is given.
pub const DEFAULT_RESOLUTION: usize = 256;
/// Canvas width when none is given.
pub const DEFAULT_WIDTH: u32 = 800;
/// Canvas height when none is given.
pub const DEFAULT_HEIGHT: u32 = 600;

/// The kind of plot to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlotKind {
    /// Point markers for x/y pairs.
    Scatter,
    /// Densified polylines against a shared x series.
    Line,
    /// Density heatmap of summed weights.
    KdeSum,
    /// Density heatmap of averaged weights.
    KdeAverage,
}

impl PlotKind {
    /// Name as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Scatter => "scatter",
            Self::Line => "line",
            Self::KdeSum => "kde-sum",
            Self::KdeAverage => "kde-average",
        }
    }

    /// Aggregation mode for density plots.
    pub fn aggregation(self) -> Option<Aggregation> {
        match self {
            Self::KdeSum => Some(Aggregation::Sum),
            Self::KdeAverage => Some(Aggregation::Average),
            Self::Scatter | Self::Line => None,
        }
    }

    /// Blur passes used when `--blur-size` is not given.
    pub fn default_blur_size(self) -> usize {
        match self {
            Self::KdeSum | Self::KdeAverage => DEFAULT_DENSITY_BLUR,
            Self::Scatter | Self::Line => 0,
        }
    }
}

/// How scatter plots pair columns into x/y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Pairing {
    /// Columns alternate x, y, x, y...
    #[default]
    Interleaved,
    /// The first column is x for every other column.
    SharedX,
}

impl Pairing {
    /// Name as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Interleaved => "interleaved",
            Self::SharedX => "shared-x",
        }
    }
}

/// Everything a plot driver needs to know.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Plot type.
    pub kind: PlotKind,
    /// Input CSV.
    pub data: PathBuf,
    /// PNG destination, if any.
    pub output: Option<PathBuf>,
    /// Where line plots dump their densified samples.
    pub preprocessed: Option<PathBuf>,
    /// Blur passes.
    pub blur_size: usize,
    /// Samples inserted between neighbouring line points.
    pub middle_points: usize,
    /// Density grid side length.
    pub resolution: usize,
    /// Scatter column pairing.
    pub pairing: Pairing,
    /// Density colour ramp.
    pub palette: ColorPalette,
    /// Seed of the series colour stream.
    pub seed: u64,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Open the terminal view after rendering.
    pub show: bool,
    /// Proportions of the plot layout.
    pub layout: LayoutConfig,
}

impl PlotConfig {
    /// Defaults for `kind` reading from `data`.
    pub fn new(kind: PlotKind, data: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            data: data.into(),
            output: None,
            preprocessed: None,
            blur_size: kind.default_blur_size(),
            middle_points: 0,
            resolution: DEFAULT_RESOLUTION,
            pairing: Pairing::default(),
            palette: ColorPalette::default(),
            seed: DEFAULT_SEED,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            show: true,
            layout: LayoutConfig::default(),
        }
    }

    /// Options worth echoing in the legend for this plot kind.
    pub fn summary(&self) -> Vec<String> {
        let mut lines = vec![format!("type: {}", self.kind.name())];
        match self.kind {
            PlotKind::Scatter => {
                lines.push(format!("pairing: {}", self.pairing.name()));
                lines.push(format!("seed: {}", self.seed));
            }
            PlotKind::Line => {
                lines.push(format!("middle points: {}", self.middle_points));
                lines.push(format!("blur: {}", self.blur_size));
                lines.push(format!("seed: {}", self.seed));
            }
            PlotKind::KdeSum | PlotKind::KdeAverage => {
                lines.push(format!("resolution: {}", self.resolution));
                lines.push(format!("blur: {}", self.blur_size));
                lines.push(format!("palette: {}", self.palette.name()));
            }
        }
        lines
    }
}
