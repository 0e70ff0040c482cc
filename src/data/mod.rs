//! Data reading and representation.
//!
//! This module handles reading CSV files and representing their columns
//! as named numeric series.

mod reader;
mod series;

pub use reader::DataReader;
pub use series::Series;
