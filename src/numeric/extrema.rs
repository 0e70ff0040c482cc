//! Value ranges over one or more sequences.

use crate::data::Series;
use crate::error::{PlotError, Result};

/// A closed interval `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound.
    pub lo: f64,
    /// Upper bound.
    pub hi: f64,
}

impl Interval {
    /// Create an interval. Callers keep `lo <= hi`.
    pub fn new(lo: f64, hi: f64) -> Self {
        debug_assert!(lo <= hi, "interval bounds out of order: {} > {}", lo, hi);
        Self { lo, hi }
    }

    /// Width of the interval.
    pub fn span(&self) -> f64 {
        self.hi - self.lo
    }

    /// Position of `v` inside the interval, 0 at `lo` and 1 at `hi`.
    pub fn fraction(&self, v: f64) -> f64 {
        let span = self.span();
        if span.is_finite() {
            (v - self.lo) / span
        } else {
            (v / 2.0 - self.lo / 2.0) / (self.hi / 2.0 - self.lo / 2.0)
        }
    }

    /// Inverse of [`Interval::fraction`].
    pub fn lerp(&self, t: f64) -> f64 {
        let span = self.span();
        if span.is_finite() {
            self.lo + t * span
        } else {
            self.lo * (1.0 - t) + self.hi * t
        }
    }
}

/// Min/max over the concatenation of `sequences`.
///
/// Constant data is widened by one on each side so the result always has
/// `lo < hi`.
pub fn bounds<'a, I>(sequences: I) -> Result<Interval>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let mut range: Option<(f64, f64)> = None;
    for seq in sequences {
        for &v in seq {
            range = Some(match range {
                None => (v, v),
                Some((min, max)) => (min.min(v), max.max(v)),
            });
        }
    }

    let (mut lo, mut hi) = range.ok_or(PlotError::EmptySequence)?;
    if lo == hi {
        lo -= 1.0;
        hi += 1.0;
    }
    Ok(Interval::new(lo, hi))
}

/// Bounds of the x-role and y-role series.
///
/// `is_x` receives the series index; series for which it returns true
/// contribute to the x interval, the others to the y interval.
pub fn bounds_xy<F>(series: &[Series], is_x: F) -> Result<(Interval, Interval)>
where
    F: Fn(usize) -> bool,
{
    let (xs, ys): (Vec<_>, Vec<_>) = series
        .iter()
        .enumerate()
        .partition(|(i, _)| is_x(*i));

    let x = bounds(xs.iter().map(|(_, s)| s.values.as_slice()))?;
    let y = bounds(ys.iter().map(|(_, s)| s.values.as_slice()))?;
    Ok((x, y))
}
