//! Densify and smooth a 1-D sample sequence for line plots.

use crate::error::{PlotError, Result};

/// Insert `middle_points` linear samples between each consecutive pair of
/// `values`, then apply `blur_iterations` three-point smoothing sweeps.
///
/// Both ends are padded with `middle_points + 1` copies of the end value so
/// smoothing does not pull the endpoints inward. A sweep walks the interior
/// in index order, replacing `v[i]` with `(v[i - 1] + v[i + 1]) / 2`, where
/// `v[i - 1]` has already been updated by the same sweep.
pub fn densify(values: &[f64], middle_points: i64, blur_iterations: i64) -> Result<Vec<f64>> {
    if middle_points < 0 {
        return Err(PlotError::invalid_parameter(
            "middle-points",
            format!("must be >= 0, got {}", middle_points),
        ));
    }
    if blur_iterations < 0 {
        return Err(PlotError::invalid_parameter(
            "blur-size",
            format!("must be >= 0, got {}", blur_iterations),
        ));
    }
    let (first, last) = match (values.first(), values.last()) {
        (Some(&f), Some(&l)) => (f, l),
        _ => return Err(PlotError::EmptySequence),
    };

    let m = middle_points as usize;
    let steps = (m + 1) as f64;
    let mut dense = Vec::with_capacity(values.len() * (m + 1) + 2 * m + 1);
    dense.extend(std::iter::repeat(first).take(m));
    for pair in values.windows(2) {
        let (l, r) = (pair[0], pair[1]);
        dense.extend((0..=m).map(|i| l + (r - l) * i as f64 / steps));
    }
    dense.extend(std::iter::repeat(last).take(m + 1));

    for _ in 0..blur_iterations {
        for i in 1..dense.len().saturating_sub(1) {
            dense[i] = (dense[i - 1] + dense[i + 1]) / 2.0;
        }
    }

    Ok(dense)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_without_middle_points_or_blur() {
        assert_eq!(densify(&[1.0, 2.0, 10.0], 0, 0).unwrap(), vec![1.0, 2.0, 10.0]);
    }

    #[test]
    fn one_middle_point() {
        assert_eq!(
            densify(&[1.0, 2.0, 10.0], 1, 0).unwrap(),
            vec![1.0, 1.0, 1.5, 2.0, 6.0, 10.0, 10.0]
        );
    }

    #[test]
    fn one_middle_point_and_one_blur_sweep() {
        assert_eq!(
            densify(&[1.0, 2.0, 10.0], 1, 1).unwrap(),
            vec![1.0, 1.25, 1.625, 3.8125, 6.90625, 8.453125, 10.0]
        );
    }

    #[test]
    fn single_value_is_padded() {
        assert_eq!(densify(&[3.0], 2, 5).unwrap(), vec![3.0; 5]);
    }

    #[test]
    fn endpoints_survive_blur() {
        let out = densify(&[0.0, 10.0, 0.0, 10.0], 3, 20).unwrap();
        assert_eq!(out[0], 0.0);
        assert_eq!(*out.last().unwrap(), 10.0);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(matches!(
            densify(&[1.0], -1, 0),
            Err(PlotError::InvalidParameter { name: "middle-points", .. })
        ));
        assert!(matches!(
            densify(&[1.0], 0, -3),
            Err(PlotError::InvalidParameter { name: "blur-size", .. })
        ));
        assert!(matches!(densify(&[], 0, 0), Err(PlotError::EmptySequence)));
    }
}
