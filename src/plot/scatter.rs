//! Scatter plots: one marker per x/y sample pair.

use super::frame::{CanvasLayout, CoordinateFrame};
use super::legend::Legend;
use super::{check_count, check_non_empty, describe_bounds, MAX_SERIES};
use crate::config::{Pairing, PlotConfig};
use crate::data::Series;
use crate::error::{PlotError, Result};
use crate::numeric::bounds_xy;
use crate::render::Renderer;
use crate::util::ColorSequence;

const PLOT: &str = "scatter";

/// The x/y column pairs for `pairing`, as indices into `series`.
pub fn pairs(series: &[Series], pairing: Pairing) -> Result<Vec<(usize, usize)>> {
    match pairing {
        Pairing::Interleaved => {
            check_count(PLOT, series, 2..=MAX_SERIES, "an even number of 2 to 100")?;
            if series.len() % 2 != 0 {
                return Err(PlotError::series_count(
                    PLOT,
                    "an even number of 2 to 100",
                    series.len(),
                ));
            }
            Ok((0..series.len()).step_by(2).map(|i| (i, i + 1)).collect())
        }
        Pairing::SharedX => {
            check_count(PLOT, series, 2..=MAX_SERIES, "2 to 100")?;
            Ok((1..series.len()).map(|i| (0, i)).collect())
        }
    }
}

/// Draw a scatter plot of `series` into `out`.
pub fn plot(
    series: &[Series],
    config: &PlotConfig,
    colors: &mut dyn ColorSequence,
    out: &mut dyn Renderer,
) -> Result<()> {
    let pairs = pairs(series, config.pairing)?;
    check_non_empty(series)?;

    let (bx, by) = match config.pairing {
        Pairing::Interleaved => bounds_xy(series, |i| i % 2 == 0)?,
        Pairing::SharedX => bounds_xy(series, |i| i == 0)?,
    };
    tracing::debug!("scatter bounds x={:?} y={:?}", bx, by);

    let layout = CanvasLayout::new(config.width, config.height, &config.layout, true);
    let radius = layout.marker_radius();
    let frame = CoordinateFrame::new(bx, by, layout);

    let x_caption = match config.pairing {
        Pairing::Interleaved => "x",
        Pairing::SharedX => series[0].name.as_str(),
    };
    frame.draw_axes(out, x_caption, "y")?;

    let mut legend = Legend::new();
    for (xi, yi) in pairs {
        let (xs, ys) = (&series[xi], &series[yi]);
        if xs.len() != ys.len() {
            tracing::warn!(
                "skipping '{}' against '{}': {} x values but {} y values",
                ys.name,
                xs.name,
                xs.len(),
                ys.len()
            );
            continue;
        }

        let color = colors.next_color();
        for (&x, &y) in xs.values.iter().zip(&ys.values) {
            out.circle(frame.to_display(x, y), radius, color);
        }
        legend.swatch(format!("{}, {}", xs.name, ys.name), color);
    }

    for line in describe_bounds(bx, by) {
        legend.note(line);
    }
    for line in config.summary() {
        legend.note(line);
    }
    legend.draw(out, frame.layout());

    Ok(())
}
