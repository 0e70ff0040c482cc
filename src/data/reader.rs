//! CSV file reader.

use super::Series;
use crate::error::{PlotError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// CSV data reader.
///
/// The first row names the columns and every row must have the same number
/// of cells. Each column becomes one [`Series`]; a column stops at its first
/// cell that is not a finite number, later cells of that column are ignored.
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Read a CSV file.
    pub fn read_file(path: &Path) -> Result<Vec<Series>> {
        tracing::debug!("reading {}", path.display());
        let file = File::open(path).map_err(|e| PlotError::file_open(path.to_path_buf(), e))?;

        match Self::read_from(file) {
            Err(PlotError::EmptyFile { .. }) => Err(PlotError::EmptyFile {
                path: path.to_path_buf(),
            }),
            other => other,
        }
    }

    /// Read CSV text from any reader.
    pub fn read_from<R: Read>(input: R) -> Result<Vec<Series>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .trim(csv::Trim::All)
            .from_reader(input);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            tracing::error!("the file is empty");
            return Err(PlotError::EmptyFile {
                path: Default::default(),
            });
        }

        let mut series: Vec<Series> = headers
            .iter()
            .map(|name| Series::new(name, Vec::new()))
            .collect();
        let mut open = vec![true; series.len()];

        let mut rows = 0usize;
        for record in reader.records() {
            let record = record?;
            rows += 1;
            for (col, cell) in record.iter().enumerate() {
                if !open[col] {
                    continue;
                }
                match cell.parse::<f64>() {
                    Ok(v) if v.is_finite() => series[col].values.push(v),
                    _ => {
                        tracing::debug!(
                            "column '{}' stops at row {}: {:?} is not a number",
                            series[col].name,
                            rows,
                            cell
                        );
                        open[col] = false;
                    }
                }
            }
        }

        tracing::info!("read matrix {} x {}", rows + 1, series.len());
        Ok(series)
    }
}
