//! Axis tick selection.
//!
//! Ticks are the multiples of a step `k` that fall inside the axis interval.
//! The step starts as the smallest power of ten that yields at most
//! [`MAX_TICKS`] ticks and is then halved for as long as the halved step
//! still fits. Halving at most doubles the count plus one, so the final
//! count lands in `MIN_TICKS..=MAX_TICKS`.

use crate::error::{PlotError, Result};

/// Upper bound on the number of ticks per axis.
pub const MAX_TICKS: usize = 10;

/// Lower bound on the number of ticks per axis (for representable ranges).
pub const MIN_TICKS: usize = 5;

// Beyond this many candidate multiples the count is only estimated.
const ENUMERATE_LIMIT: f64 = 1000.0;

/// Choose tick values for `[lo, hi]`.
pub fn plan(lo: f64, hi: f64) -> Result<Vec<f64>> {
    if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
        return Err(PlotError::InvalidRange { lo, hi });
    }

    let count = |k: f64| -> f64 { multiples_in(lo, hi, k).map_or_else(|c| c, |t| t.len() as f64) };

    // Start where the step is at least ten times the width: one tick at most.
    // `hi - lo` overflows for ranges wider than f64::MAX; half of it does not.
    let width = hi - lo;
    let mut exp = if width.is_finite() {
        width.log10().ceil() as i32 + 1
    } else {
        (hi / 2.0 - lo / 2.0).log10().ceil() as i32 + 2
    };
    let mut step = pow10(exp);
    while exp > f64::MIN_10_EXP - 20 && count(pow10(exp - 1)) <= MAX_TICKS as f64 {
        exp -= 1;
        step = pow10(exp);
    }

    while step > 0.0 && count(step / 2.0) <= MAX_TICKS as f64 {
        step /= 2.0;
    }

    let ticks = multiples_in(lo, hi, step).unwrap_or_default();
    tracing::debug!("ticks for [{}, {}]: step {} -> {} ticks", lo, hi, step, ticks.len());
    Ok(ticks)
}

fn pow10(exp: i32) -> f64 {
    10f64.powi(exp)
}

/// Multiples of `step` inside `[lo, hi]`, ascending.
///
/// Returns `Err(estimate)` instead of the list when there would be too many
/// of them to enumerate; the estimate is NaN when the step underflows.
fn multiples_in(lo: f64, hi: f64, step: f64) -> std::result::Result<Vec<f64>, f64> {
    let first = (lo / step).ceil();
    let last = (hi / step).floor();
    let estimate = last - first + 1.0;
    if !estimate.is_finite() || estimate > ENUMERATE_LIMIT {
        return Err(if step > 0.0 { estimate } else { f64::NAN });
    }
    if estimate <= 0.0 {
        return Ok(Vec::new());
    }

    let mut ticks: Vec<f64> = Vec::with_capacity(estimate as usize + 2);
    // One extra candidate on each side absorbs rounding in the divisions above.
    for i in -1..=(estimate as i64) {
        let t = (first + i as f64) * step;
        if t < lo || t > hi {
            continue;
        }
        if ticks.last().map_or(true, |&prev| t > prev) {
            ticks.push(t);
        }
    }
    Ok(ticks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn check(lo: f64, hi: f64) {
        let ticks = plan(lo, hi).unwrap();
        assert!(
            (MIN_TICKS..=MAX_TICKS).contains(&ticks.len()),
            "|plan({}, {})| = {}, not in 5..=10: {:?}",
            lo,
            hi,
            ticks.len(),
            ticks
        );
        for t in &ticks {
            assert!(lo <= *t && *t <= hi, "tick {} outside [{}, {}]", t, lo, hi);
        }
        for w in ticks.windows(2) {
            assert!(w[0] < w[1], "ticks not increasing: {:?}", ticks);
        }
    }

    #[test]
    fn zero_to_small_integers() {
        for i in 1..=10 {
            check(0.0, i as f64);
        }
    }

    #[test]
    fn random_unit_intervals() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let a: f64 = rng.gen();
            let b: f64 = rng.gen();
            if a != b {
                check(a.min(b), a.max(b));
            }
        }
    }

    #[test]
    fn random_reciprocal_intervals() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let a = 1.0 / rng.gen_range(1e-6..1.0f64);
            let b = 1.0 / rng.gen_range(1e-6..1.0f64);
            if a != b {
                check(a.min(b), a.max(b));
            }
        }
    }

    #[test]
    fn negative_and_wide_ranges() {
        check(-3.7, 2.2);
        check(-1e6, -2.5e5);
        check(1e-9, 3e-9);
        check(123_456.0, 123_457.0);
    }

    #[test]
    fn ranges_wider_than_f64_max() {
        check(-1e308, 1e308);
        check(-f64::MAX, f64::MAX);
        check(f64::MIN, 0.0);
    }

    #[test]
    fn unit_interval_uses_eighths() {
        let ticks = plan(0.0, 1.0).unwrap();
        assert_eq!(ticks.len(), 9);
        assert_eq!(ticks[1], 0.125);
        assert_eq!(ticks[8], 1.0);
    }

    #[test]
    fn rejects_empty_or_reversed_ranges() {
        assert!(matches!(plan(1.0, 1.0), Err(PlotError::InvalidRange { .. })));
        assert!(matches!(plan(2.0, 1.0), Err(PlotError::InvalidRange { .. })));
        assert!(plan(f64::NAN, 1.0).is_err());
        assert!(plan(0.0, f64::INFINITY).is_err());
    }
}
