//! Line plots: every series after the first is drawn against the first.

use super::frame::{CanvasLayout, CoordinateFrame};
use super::legend::Legend;
use super::{check_count, check_non_empty, describe_bounds, MAX_SERIES};
use crate::config::PlotConfig;
use crate::data::Series;
use crate::error::{PlotError, Result};
use crate::numeric::{bounds_xy, densify};
use crate::render::{Color, Renderer};
use crate::util::ColorSequence;
use std::path::Path;

/// One densified line.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseLine {
    /// Name of the y series.
    pub name: String,
    /// Densified `(x, y)` samples.
    pub points: Vec<(f64, f64)>,
}

/// Densify every y series against the first series.
///
/// A y series of different length from x is paired with x row by row and
/// both are cut to the shorter one before densifying.
pub fn densify_lines(series: &[Series], middle_points: usize, blur: usize) -> Result<Vec<DenseLine>> {
    let (middle, blur) = (middle_points as i64, blur as i64);
    let xs = &series[0].values;
    let full_x = densify(xs, middle, blur)?;

    series[1..]
        .iter()
        .map(|ys| {
            let n = xs.len().min(ys.len());
            let points = if ys.len() == xs.len() {
                let y = densify(&ys.values, middle, blur)?;
                full_x.iter().copied().zip(y).collect()
            } else {
                tracing::warn!(
                    "'{}' has {} values but x has {}, truncating to {}",
                    ys.name,
                    ys.len(),
                    xs.len(),
                    n
                );
                let x = densify(&xs[..n], middle, blur)?;
                let y = densify(&ys.values[..n], middle, blur)?;
                x.into_iter().zip(y).collect()
            };
            Ok(DenseLine {
                name: ys.name.clone(),
                points,
            })
        })
        .collect()
}

/// Draw a line plot of `series` into `out`, returning the drawn lines.
pub fn plot(
    series: &[Series],
    config: &PlotConfig,
    colors: &mut dyn ColorSequence,
    out: &mut dyn Renderer,
) -> Result<Vec<DenseLine>> {
    check_count("line", series, 2..=MAX_SERIES, "2 to 100")?;
    check_non_empty(series)?;

    // Interpolation and blurring stay inside the convex hull of the data.
    let (bx, by) = bounds_xy(series, |i| i == 0)?;
    let lines = densify_lines(series, config.middle_points, config.blur_size)?;

    let layout = CanvasLayout::new(config.width, config.height, &config.layout, true);
    let radius = layout.marker_radius();
    let frame = CoordinateFrame::new(bx, by, layout);
    frame.draw_axes(out, &series[0].name, "y")?;

    let mut legend = Legend::new();
    legend.swatch(series[0].name.as_str(), Color::BLACK);
    for line in &lines {
        let color = colors.next_color();
        let points: Vec<(f64, f64)> = line
            .points
            .iter()
            .map(|&(x, y)| frame.to_display(x, y))
            .collect();
        out.polyline(&points, color);
        for &p in &points {
            out.circle(p, radius, color);
        }
        legend.swatch(line.name.as_str(), color);
    }

    for line in describe_bounds(bx, by) {
        legend.note(line);
    }
    for line in config.summary() {
        legend.note(line);
    }
    legend.draw(out, frame.layout());

    Ok(lines)
}

/// Write densified lines as `series,x,y` rows.
pub fn write_preprocessed(lines: &[DenseLine], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| match e.into_kind() {
        csv::ErrorKind::Io(io) => PlotError::file_write(path.to_path_buf(), io),
        other => PlotError::InputFormat(format!("{:?}", other)),
    })?;

    writer.write_record(["series", "x", "y"])?;
    let mut rows = 0usize;
    for line in lines {
        for (x, y) in &line.points {
            writer.write_record([line.name.clone(), x.to_string(), y.to_string()])?;
            rows += 1;
        }
    }
    writer
        .flush()
        .map_err(|e| PlotError::file_write(path.to_path_buf(), e))?;

    tracing::info!("wrote {} preprocessed samples to {}", rows, path.display());
    Ok(())
}
