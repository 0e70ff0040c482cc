//! Density heatmaps (`kde-sum`, `kde-average`).

use super::frame::{CanvasLayout, CoordinateFrame};
use super::legend::Legend;
use super::{check_count, check_non_empty, describe_bounds};
use crate::config::PlotConfig;
use crate::data::Series;
use crate::error::{PlotError, Result};
use crate::numeric::{bounds, Aggregation, DensityGrid, Interval};
use crate::render::Renderer;
use crate::util::formatters::format_stat_value;
use crate::util::ColorRamp;
use ndarray::Array2;

/// Aggregated grid ready to be drawn.
#[derive(Debug, Clone)]
pub struct DensityEstimate {
    /// Binned samples and cell geometry.
    pub grid: DensityGrid,
    /// Aggregated and blurred cell values, indexed `[[x, y]]`.
    pub values: Array2<f64>,
    /// Data domain of the x samples.
    pub domain_x: Interval,
    /// Data domain of the y samples.
    pub domain_y: Interval,
    /// Range of `values`.
    pub range: Interval,
}

/// Bin `x`, `y` and optional weight series and aggregate them.
///
/// Series are cut to the shortest of them; a missing weight counts as 1.
pub fn estimate(
    series: &[Series],
    mode: Aggregation,
    resolution: usize,
    blur: usize,
) -> Result<DensityEstimate> {
    check_count("density", series, 2..=3, "2 or 3")?;
    check_non_empty(series)?;

    let n = series.iter().map(Series::len).min().unwrap_or(0);
    if series.iter().any(|s| s.len() != n) {
        tracing::warn!("series lengths differ, using the first {} rows", n);
    }
    let weights = match series.get(2) {
        Some(w) => w.clone(),
        None => Series::ones("weight", n),
    };
    let (xs, ys, ws) = (&series[0].values[..n], &series[1].values[..n], &weights.values[..n]);

    let domain_x = bounds([xs])?;
    let domain_y = bounds([ys])?;
    let points = xs
        .iter()
        .zip(ys)
        .zip(ws)
        .map(|((&x, &y), &w)| (x, y, w));
    let grid = DensityGrid::build(resolution, points, domain_x, domain_y)?;
    let values = grid.aggregate(mode, blur);

    let flat: Vec<f64> = values.iter().copied().collect();
    let range = bounds([flat.as_slice()])?;
    tracing::debug!("density {} range {:?}", mode.name(), range);

    Ok(DensityEstimate {
        grid,
        values,
        domain_x,
        domain_y,
        range,
    })
}

/// Draw a density heatmap of `series` into `out`.
pub fn plot(series: &[Series], config: &PlotConfig, out: &mut dyn Renderer) -> Result<()> {
    let mode = config.kind.aggregation().ok_or_else(|| {
        PlotError::invalid_parameter("type", format!("{} is not a density plot", config.kind.name()))
    })?;
    let est = estimate(series, mode, config.resolution, config.blur_size)?;

    let layout = CanvasLayout::new(config.width, config.height, &config.layout, true);
    let frame = CoordinateFrame::new(est.domain_x, est.domain_y, layout);
    let ramp = ColorRamp::new(config.palette);

    for ((x, y), &v) in est.values.indexed_iter() {
        let (x0, y0, x1, y1) = est.grid.cell_extent(x, y);
        out.rect(
            frame.to_display(x0, y0),
            frame.to_display(x1, y1),
            ramp.map(v, est.range.lo, est.range.hi),
        );
    }
    frame.draw_axes(out, &series[0].name, &series[1].name)?;

    let mut legend = Legend::new();
    legend
        .note(format!("max: {}", format_stat_value(est.range.hi)))
        .color_bar(ramp, est.range.lo, est.range.hi)
        .note(format!("min: {}", format_stat_value(est.range.lo)));
    for line in describe_bounds(est.domain_x, est.domain_y) {
        legend.note(line);
    }
    for line in config.summary() {
        legend.note(line);
    }
    legend.draw(out, frame.layout());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlotKind;
    use crate::data::DataReader;
    use crate::render::{Primitive, Scene};

    #[test]
    fn average_of_two_rows_keeps_weights() {
        let csv = "x,y,z\n0,0,3\n1,1,7\n";
        let series = DataReader::read_from(csv.as_bytes()).unwrap();
        let est = estimate(&series, Aggregation::Average, 4, 0).unwrap();

        assert_eq!(est.values.dim(), (4, 4));
        for ((x, y), &v) in est.values.indexed_iter() {
            match (x, y) {
                (0, 0) => assert_eq!(v, 3.0),
                (3, 3) => assert_eq!(v, 7.0),
                _ => assert_eq!(v, 0.0),
            }
        }
    }

    #[test]
    fn sum_without_weights_counts_samples() {
        let series = vec![
            Series::new("x", vec![0.0, 0.0, 1.0]),
            Series::new("y", vec![0.0, 0.0, 1.0]),
        ];
        let est = estimate(&series, Aggregation::Sum, 2, 0).unwrap();
        assert_eq!(est.values[[0, 0]], 2.0);
        assert_eq!(est.values[[1, 1]], 1.0);
        assert_eq!(est.range, Interval::new(0.0, 2.0));
    }

    #[test]
    fn truncates_to_shortest_series() {
        let series = vec![
            Series::new("x", vec![0.0, 1.0, 9.0]),
            Series::new("y", vec![0.0, 1.0]),
        ];
        let est = estimate(&series, Aggregation::Sum, 2, 0).unwrap();
        assert_eq!(est.domain_x, Interval::new(0.0, 1.0));
        assert_eq!(est.values.sum(), 2.0);
    }

    #[test]
    fn rejects_four_series() {
        let series: Vec<Series> = (0..4).map(|i| Series::new(format!("s{}", i), vec![1.0])).collect();
        let err = estimate(&series, Aggregation::Sum, 4, 0).unwrap_err();
        assert!(matches!(err, PlotError::SeriesCount { found: 4, .. }));
    }

    #[test]
    fn rejects_zero_resolution() {
        let series = vec![Series::new("x", vec![0.0]), Series::new("y", vec![0.0])];
        let err = estimate(&series, Aggregation::Sum, 0, 0).unwrap_err();
        assert!(matches!(err, PlotError::InvalidParameter { name: "resolution", .. }));
    }

    #[test]
    fn draws_every_cell() {
        let series = vec![
            Series::new("x", vec![0.0, 1.0, 2.0]),
            Series::new("y", vec![2.0, 1.0, 0.0]),
        ];
        let mut config = PlotConfig::new(PlotKind::KdeSum, "in.csv");
        config.resolution = 5;
        config.blur_size = 1;
        let mut scene = Scene::new(800, 600);
        plot(&series, &config, &mut scene).unwrap();

        let cells = scene
            .primitives
            .iter()
            .take_while(|p| matches!(p, Primitive::Rect { .. }))
            .count();
        assert_eq!(cells, 25);
        let texts: Vec<&str> = scene.texts().collect();
        assert!(texts.contains(&"type: kde-sum"));
        assert!(texts.iter().any(|t| t.starts_with("max: ")));
    }

    #[test]
    fn cells_tile_the_plot_area() {
        let series = vec![Series::new("x", vec![0.0, 1.0]), Series::new("y", vec![0.0, 1.0])];
        let mut config = PlotConfig::new(PlotKind::KdeAverage, "in.csv");
        config.resolution = 2;
        config.blur_size = 0;
        let mut scene = Scene::new(800, 600);
        plot(&series, &config, &mut scene).unwrap();

        let Primitive::Rect { corner, .. } = &scene.primitives[0] else {
            panic!("expected a cell first");
        };
        assert_eq!(*corner, (80.0, 540.0));
        let Primitive::Rect { opposite, .. } = &scene.primitives[3] else {
            panic!("expected a cell");
        };
        assert_eq!(*opposite, (560.0, 60.0));
    }
}
