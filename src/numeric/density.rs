//! Density grids: binning, box blur and normalization.
//!
//! Samples are binned into a square `resolution × resolution` grid indexed as
//! `grid[[x, y]]`. Cell `(x, y)` covers the unit square `[x, x + 1) × [y, y + 1)`
//! in cell space; [`DensityGrid::cell_extent`] maps it back to data space.

use super::extrema::Interval;
use crate::error::{PlotError, Result};
use ndarray::Array2;

/// Largest accepted grid resolution (cells per side).
pub const MAX_RESOLUTION: usize = 4096;

/// Reject resolutions outside `1..=MAX_RESOLUTION`.
pub fn check_resolution(resolution: usize) -> Result<()> {
    if resolution == 0 {
        return Err(PlotError::invalid_parameter(
            "resolution",
            "must be a positive integer",
        ));
    }
    if resolution > MAX_RESOLUTION {
        return Err(PlotError::invalid_parameter(
            "resolution",
            format!("{} exceeds the maximum of {}", resolution, MAX_RESOLUTION),
        ));
    }
    Ok(())
}

/// How cell values are aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aggregation {
    /// Blurred sum of weights.
    #[default]
    Sum,
    /// Blurred sum divided by blurred sample count.
    Average,
}

impl Aggregation {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Average => "average",
        }
    }
}

/// Binned weighted samples over a 2-D domain.
#[derive(Debug, Clone)]
pub struct DensityGrid {
    resolution: usize,
    domain_x: Interval,
    domain_y: Interval,
    sum: Array2<f64>,
    count: Array2<f64>,
}

impl DensityGrid {
    /// Bin `(x, y, weight)` samples.
    ///
    /// The domains must contain every sample; they are normally the extrema
    /// of the same samples.
    pub fn build<I>(
        resolution: usize,
        points: I,
        domain_x: Interval,
        domain_y: Interval,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64, f64)>,
    {
        check_resolution(resolution)?;

        let mut grid = Self {
            resolution,
            domain_x,
            domain_y,
            sum: Array2::zeros((resolution, resolution)),
            count: Array2::zeros((resolution, resolution)),
        };

        let mut binned = 0usize;
        for (x, y, w) in points {
            let cell = [grid.to_cell(domain_x, x), grid.to_cell(domain_y, y)];
            grid.sum[cell] += w;
            grid.count[cell] += 1.0;
            binned += 1;
        }
        tracing::debug!("binned {} samples into {}x{} grid", binned, resolution, resolution);

        Ok(grid)
    }

    /// Cell index of `v` along one axis.
    pub fn to_cell(&self, domain: Interval, v: f64) -> usize {
        let scaled = (domain.fraction(v) * (self.resolution - 1) as f64).round();
        // Out-of-domain samples are a caller error; keep them on the grid.
        scaled.clamp(0.0, (self.resolution - 1) as f64) as usize
    }

    /// Grid side length.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Raw weight sums.
    pub fn sum(&self) -> &Array2<f64> {
        &self.sum
    }

    /// Raw sample counts.
    pub fn count(&self) -> &Array2<f64> {
        &self.count
    }

    /// Data-space rectangle `(x0, y0, x1, y1)` covered by cell `(x, y)`.
    pub fn cell_extent(&self, x: usize, y: usize) -> (f64, f64, f64, f64) {
        let n = self.resolution as f64;
        (
            self.domain_x.lerp(x as f64 / n),
            self.domain_y.lerp(y as f64 / n),
            self.domain_x.lerp((x + 1) as f64 / n),
            self.domain_y.lerp((y + 1) as f64 / n),
        )
    }

    /// Aggregate and smooth the grid with `iterations` blur passes.
    pub fn aggregate(&self, mode: Aggregation, iterations: usize) -> Array2<f64> {
        match mode {
            Aggregation::Sum => blur(self.sum.clone(), iterations),
            Aggregation::Average => {
                // Both grids must see the same number of passes.
                let sum = blur(self.sum.clone(), iterations);
                let count = blur(self.count.clone(), iterations);
                normalize(&sum, &count)
            }
        }
    }
}

/// Replace every cell with the mean of itself and its four axis neighbours,
/// `iterations` times. Cells outside the grid count as zero.
pub fn blur(grid: Array2<f64>, iterations: usize) -> Array2<f64> {
    let (w, h) = grid.dim();
    let mut current = grid;
    for _ in 0..iterations {
        let mut next = Array2::zeros((w, h));
        for ((x, y), out) in next.indexed_iter_mut() {
            let mut sum = current[[x, y]];
            if x > 0 {
                sum += current[[x - 1, y]];
            }
            if x + 1 < w {
                sum += current[[x + 1, y]];
            }
            if y > 0 {
                sum += current[[x, y - 1]];
            }
            if y + 1 < h {
                sum += current[[x, y + 1]];
            }
            *out = sum / 5.0;
        }
        current = next;
    }
    current
}

/// Elementwise `sum / count`, with 0 wherever `count` is 0.
pub fn normalize(sum: &Array2<f64>, count: &Array2<f64>) -> Array2<f64> {
    let mut empty_cells = 0usize;
    let out = ndarray::Zip::from(sum).and(count).map_collect(|&s, &c| {
        if c != 0.0 {
            s / c
        } else {
            empty_cells += 1;
            0.0
        }
    });
    if empty_cells > 0 {
        tracing::warn!("zero count encountered in {} cells", empty_cells);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn unit() -> Interval {
        Interval::new(0.0, 1.0)
    }

    #[test]
    fn domain_edges_map_to_first_and_last_cell() {
        let grid = DensityGrid::build(8, [(0.0, 1.0, 1.0)], unit(), unit()).unwrap();
        assert_eq!(grid.to_cell(unit(), 0.0), 0);
        assert_eq!(grid.to_cell(unit(), 1.0), 7);
        assert_eq!(grid.sum()[[0, 7]], 1.0);
        assert_eq!(grid.count()[[0, 7]], 1.0);
    }

    #[test]
    fn accumulates_weights_and_counts() {
        let points = [(0.0, 0.0, 2.0), (0.01, 0.0, 3.0), (1.0, 1.0, 4.0)];
        let grid = DensityGrid::build(4, points, unit(), unit()).unwrap();
        assert_eq!(grid.sum()[[0, 0]], 5.0);
        assert_eq!(grid.count()[[0, 0]], 2.0);
        assert_eq!(grid.sum()[[3, 3]], 4.0);
        assert_eq!(grid.sum().sum(), 9.0);
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let r = DensityGrid::build(0, [(0.0, 0.0, 1.0)], unit(), unit());
        assert!(matches!(r, Err(PlotError::InvalidParameter { .. })));
    }

    #[test]
    fn oversized_resolution_is_rejected() {
        let r = DensityGrid::build(5_000_000_000, [(0.0, 0.0, 1.0)], unit(), unit());
        assert!(matches!(r, Err(PlotError::InvalidParameter { name: "resolution", .. })));
        let r = DensityGrid::build(MAX_RESOLUTION + 1, [(0.0, 0.0, 1.0)], unit(), unit());
        assert!(matches!(r, Err(PlotError::InvalidParameter { name: "resolution", .. })));
    }

    #[test]
    fn blur_zero_iterations_is_identity() {
        let g = array![[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(blur(g.clone(), 0), g);
    }

    #[test]
    fn blur_uses_zero_outside_the_grid() {
        let mut g = Array2::zeros((3, 3));
        g[[1, 1]] = 5.0;
        let b = blur(g, 1);
        assert_eq!(b[[1, 1]], 1.0);
        assert_eq!(b[[0, 1]], 1.0);
        assert_eq!(b[[1, 2]], 1.0);
        assert_eq!(b[[0, 0]], 0.0);

        // A corner loses mass to the missing neighbours.
        let mut c = Array2::zeros((3, 3));
        c[[0, 0]] = 5.0;
        let b = blur(c, 1);
        assert_eq!(b.sum(), 3.0);
    }

    #[test]
    fn blur_passes_are_double_buffered() {
        let g = array![[0.0, 5.0, 0.0, 0.0]];
        let b = blur(g, 1);
        // Row-major order would see the updated left neighbour if done in place.
        assert_eq!(b, array![[1.0, 1.0, 1.0, 0.0]]);
    }

    #[test]
    fn normalize_defines_empty_cells_as_zero() {
        let sum = array![[4.0, 1.0], [0.0, 9.0]];
        let count = array![[2.0, 0.0], [0.0, 3.0]];
        let n = normalize(&sum, &count);
        assert_eq!(n, array![[2.0, 0.0], [0.0, 3.0]]);
        assert!(n.iter().all(|v| !v.is_nan()));
    }

    #[test]
    fn average_without_blur_recovers_weights() {
        let points = [(0.0, 0.0, 7.0), (1.0, 1.0, -2.0)];
        let grid = DensityGrid::build(4, points, unit(), unit()).unwrap();
        let avg = grid.aggregate(Aggregation::Average, 0);
        assert_eq!(avg[[0, 0]], 7.0);
        assert_eq!(avg[[3, 3]], -2.0);
        assert_eq!(avg.iter().filter(|v| **v != 0.0).count(), 2);
    }

    #[test]
    fn blurred_average_of_constant_weight_is_constant() {
        let w = 2.5;
        let points = [(0.0, 0.0, w), (0.4, 0.7, w), (0.5, 0.5, w), (1.0, 0.2, w), (1.0, 1.0, w)];
        let grid = DensityGrid::build(6, points, unit(), unit()).unwrap();
        let avg = grid.aggregate(Aggregation::Average, 3);

        let filled: Vec<f64> = avg.iter().copied().filter(|v| *v != 0.0).collect();
        assert!(filled.len() > points.len(), "blur should spread into neighbours");
        for v in filled {
            assert!((v - w).abs() < 1e-9, "cell {} differs from weight {}", v, w);
        }
    }

    #[test]
    fn cell_extent_tiles_the_domain() {
        let grid = DensityGrid::build(4, [(0.0, 0.0, 1.0)], unit(), Interval::new(-2.0, 2.0))
            .unwrap();
        assert_eq!(grid.cell_extent(0, 0), (0.0, -2.0, 0.25, -1.0));
        assert_eq!(grid.cell_extent(3, 3), (0.75, 1.0, 1.0, 2.0));
    }
}
