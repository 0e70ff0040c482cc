//! Error types for csvplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for csvplot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can abort a plot invocation.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Failed to open or read the input file.
    #[error("Failed to read file: {path}")]
    FileOpen {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output file.
    #[error("Failed to write file: {path}")]
    FileWrite {
        /// Path that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input file has no header row.
    #[error("The file is empty: {path}")]
    EmptyFile {
        /// Path of the empty file.
        path: PathBuf,
    },

    /// A row has a different number of cells than the header.
    #[error("First row has {expected} columns, but line {line} has {found} columns")]
    ColumnCountMismatch {
        /// 1-based line number of the offending row.
        line: u64,
        /// Column count of the header row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },

    /// Malformed CSV that is not a column count problem.
    #[error("Malformed input: {0}")]
    InputFormat(String),

    /// The number of series does not fit the plot type.
    #[error("Need {expected} data series for {plot} plot but got {found}")]
    SeriesCount {
        /// Plot type name.
        plot: &'static str,
        /// Human readable description of the accepted counts.
        expected: String,
        /// Number of series that were read.
        found: usize,
    },

    /// A required series has no usable numeric values.
    #[error("Need at least one point but series '{name}' is empty")]
    EmptySeries {
        /// Name of the empty series.
        name: String,
    },

    /// An empty sequence was passed where values are required.
    #[error("Expected a non-empty sequence")]
    EmptySequence,

    /// A tick range with `lo >= hi` or non-finite bounds.
    #[error("Invalid range [{lo}, {hi}]")]
    InvalidRange {
        /// Lower bound.
        lo: f64,
        /// Upper bound.
        hi: f64,
    },

    /// A numeric option outside its valid range.
    #[error("Invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// What is wrong with it.
        message: String,
    },

    /// Drawing or encoding failed.
    #[error("Render error: {0}")]
    Render(String),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a FileWrite error.
    pub fn file_write(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileWrite { path, source }
    }

    /// Create a SeriesCount error.
    pub fn series_count(plot: &'static str, expected: impl Into<String>, found: usize) -> Self {
        Self::SeriesCount {
            plot,
            expected: expected.into(),
            found,
        }
    }

    /// Create an EmptySeries error.
    pub fn empty_series(name: impl Into<String>) -> Self {
        Self::EmptySeries { name: name.into() }
    }

    /// Create an InvalidParameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}

impl From<csv::Error> for PlotError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        match err.into_kind() {
            csv::ErrorKind::UnequalLengths {
                pos,
                expected_len,
                len,
            } => Self::ColumnCountMismatch {
                line: pos.map(|p| p.line()).unwrap_or(line),
                expected: expected_len as usize,
                found: len as usize,
            },
            csv::ErrorKind::Io(e) => Self::Io(e),
            other => Self::InputFormat(format!("{:?}", other)),
        }
    }
}
