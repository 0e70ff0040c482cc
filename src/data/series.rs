//! Named numeric columns.

/// One named column of numeric values, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Column name from the header row.
    pub name: String,
    /// Parsed values. May be shorter than the column if parsing stopped early.
    pub values: Vec<f64>,
}

impl Series {
    /// Create a new series.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A constant series of `len` ones.
    pub fn ones(name: impl Into<String>, len: usize) -> Self {
        Self::new(name, vec![1.0; len])
    }
}
