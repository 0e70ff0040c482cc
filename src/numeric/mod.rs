//! Numeric core of the plotting pipeline.
//!
//! Everything here is pure and deterministic: tick planning, value ranges,
//! density grids and line densification.

pub mod density;
pub mod extrema;
pub mod interpolate;
pub mod ticks;

pub use density::{check_resolution, Aggregation, DensityGrid, MAX_RESOLUTION};
pub use extrema::{bounds, bounds_xy, Interval};
pub use interpolate::densify;
