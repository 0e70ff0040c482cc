//! csvplot - plot CSV columns as scatter, line and density charts.
//!
//! csvplot reads a comma-separated file whose first row names the columns,
//! turns each column into a numeric [`data::Series`] and draws it to a PNG
//! file, a terminal view, or both.
//!
//! # Features
//!
//! - Scatter plots with interleaved or shared-x column pairing
//! - Line plots with linear densification and smoothing
//! - Density heatmaps (summed or averaged weights) with box blur
//! - "Nice" axis ticks and a legend with bounds and options
//!
//! # Example
//!
//! ```no_run
//! use csvplot::config::{PlotConfig, PlotKind};
//! use csvplot::util::SeededColors;
//! use std::path::Path;
//!
//! let mut config = PlotConfig::new(PlotKind::KdeAverage, "samples.csv");
//! config.resolution = 64;
//! let scene = csvplot::plot::render(&config, &mut SeededColors::new(config.seed))?;
//! csvplot::render::png::write(&scene, Path::new("density.png"))?;
//! # Ok::<(), csvplot::PlotError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod numeric;
pub mod plot;
pub mod render;
pub mod util;

pub use error::{PlotError, Result};
