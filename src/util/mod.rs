//! Utility functions.
//!
//! This module provides colour handling, label formatting and layout
//! constants shared by the plot drivers.

pub mod colormaps;
pub mod colors;
pub mod formatters;
pub mod layout_config;

pub use colormaps::{ColorPalette, ColorRamp};
pub use colors::{ColorSequence, CycleColors, SeededColors};
pub use layout_config::LayoutConfig;
