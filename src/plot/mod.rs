//! Plot drivers.
//!
//! Each driver validates its series, computes bounds, builds a
//! [`frame::CoordinateFrame`] and issues primitives through a
//! [`Renderer`]. [`render`] ties the reader and the drivers together and
//! returns a finished [`Scene`].

pub mod density;
pub mod frame;
pub mod legend;
pub mod line;
pub mod scatter;

use crate::config::{PlotConfig, PlotKind};
use crate::data::{DataReader, Series};
use crate::error::{PlotError, Result};
use crate::numeric::Interval;
use crate::render::Scene;
use crate::util::formatters::format_tick;
use crate::util::ColorSequence;
use std::ops::RangeInclusive;

/// Upper limit on series for scatter and line plots.
pub const MAX_SERIES: usize = 100;

/// Read `config.data` and draw the configured plot into a new scene.
///
/// Nothing is written unless the whole plot succeeds; line plots then dump
/// their densified samples when `config.preprocessed` is set.
pub fn render(config: &PlotConfig, colors: &mut dyn ColorSequence) -> Result<Scene> {
    let series = DataReader::read_file(&config.data)?;
    tracing::info!(
        "plotting {} series from {} as {}",
        series.len(),
        config.data.display(),
        config.kind.name()
    );

    let mut scene = Scene::new(config.width, config.height);
    match config.kind {
        PlotKind::Scatter => scatter::plot(&series, config, colors, &mut scene)?,
        PlotKind::Line => {
            let lines = line::plot(&series, config, colors, &mut scene)?;
            if let Some(path) = &config.preprocessed {
                line::write_preprocessed(&lines, path)?;
            }
        }
        PlotKind::KdeSum | PlotKind::KdeAverage => density::plot(&series, config, &mut scene)?,
    }

    tracing::debug!("scene holds {} primitives", scene.primitives.len());
    Ok(scene)
}

pub(crate) fn check_count(
    plot: &'static str,
    series: &[Series],
    allowed: RangeInclusive<usize>,
    expected: &str,
) -> Result<()> {
    if allowed.contains(&series.len()) {
        Ok(())
    } else {
        tracing::error!("need {} series for {} plot, got {}", expected, plot, series.len());
        Err(PlotError::series_count(plot, expected, series.len()))
    }
}

pub(crate) fn check_non_empty(series: &[Series]) -> Result<()> {
    match series.iter().find(|s| s.is_empty()) {
        Some(s) => {
            tracing::error!("series '{}' has no values", s.name);
            Err(PlotError::empty_series(s.name.as_str()))
        }
        None => Ok(()),
    }
}

pub(crate) fn describe_bounds(x: Interval, y: Interval) -> [String; 2] {
    [
        format!("x: [{}, {}]", format_tick(x.lo), format_tick(x.hi)),
        format!("y: [{}, {}]", format_tick(y.lo), format_tick(y.hi)),
    ]
}
