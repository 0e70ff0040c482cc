//! Deterministic series colours.

use crate::render::Color;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 2;

/// Source of per-series colours.
pub trait ColorSequence {
    /// Colour for the next series.
    fn next_color(&mut self) -> Color;
}

/// Colours drawn from a seeded random stream.
///
/// The same seed always yields the same colours in the same order.
#[derive(Debug, Clone)]
pub struct SeededColors {
    rng: StdRng,
}

impl SeededColors {
    /// Create a colour stream from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SeededColors {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl ColorSequence for SeededColors {
    fn next_color(&mut self) -> Color {
        Color(self.rng.gen_range(0..=0xFF_FFFF))
    }
}

/// Fixed colour list, repeated when exhausted.
#[derive(Debug, Clone)]
pub struct CycleColors {
    colors: Vec<Color>,
    next: usize,
}

impl CycleColors {
    /// Cycle through `colors`, which must not be empty.
    pub fn new(colors: Vec<Color>) -> Self {
        assert!(!colors.is_empty(), "CycleColors needs at least one colour");
        Self { colors, next: 0 }
    }
}

impl ColorSequence for CycleColors {
    fn next_color(&mut self) -> Color {
        let c = self.colors[self.next % self.colors.len()];
        self.next += 1;
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take(seq: &mut dyn ColorSequence, n: usize) -> Vec<Color> {
        (0..n).map(|_| seq.next_color()).collect()
    }

    #[test]
    fn same_seed_same_colors() {
        let a = take(&mut SeededColors::new(2), 8);
        let b = take(&mut SeededColors::new(2), 8);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = take(&mut SeededColors::new(2), 8);
        let b = take(&mut SeededColors::new(3), 8);
        assert_ne!(a, b);
    }

    #[test]
    fn colors_fit_in_24_bits() {
        assert!(take(&mut SeededColors::default(), 64)
            .iter()
            .all(|c| c.0 <= 0xFF_FFFF));
    }

    #[test]
    fn cycle_wraps() {
        let mut seq = CycleColors::new(vec![Color::BLACK, Color::WHITE]);
        assert_eq!(take(&mut seq, 3), vec![Color::BLACK, Color::WHITE, Color::BLACK]);
    }
}
