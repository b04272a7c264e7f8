//! Row store and input validation
//!
//! The host hands over headers and rows once. Before anything is rendered the
//! pair is checked: both must be present and every row must be exactly as
//! wide as the header set. Failures are terminal display states, never panics.

use super::sort::ColumnKind;
use thiserror::Error;

/// One record of the table, one string per column
pub type Row = Vec<String>;

/// Why the input cannot be shown as a table
///
/// The `Display` text is the placeholder message rendered in place of the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// Rows or headers were not supplied at all
    #[error("Missing data")]
    Missing,
    /// A row's width differs from the header count
    #[error("Invalid data")]
    InvalidShape {
        /// Zero-based index of the first offending row
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Raw input as supplied by the host, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableData {
    pub headers: Option<Vec<String>>,
    pub rows: Option<Vec<Row>>,
}

impl TableData {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self {
            headers: Some(headers),
            rows: Some(rows),
        }
    }

    /// Decide the display mode for this input
    pub fn validate(self) -> Result<Table, DataError> {
        let (Some(headers), Some(rows)) = (self.headers, self.rows) else {
            return Err(DataError::Missing);
        };

        let expected = headers.len();
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != expected)
        {
            return Err(DataError::InvalidShape {
                row,
                expected,
                found,
            });
        }

        Ok(Table::from_parts(headers, rows))
    }
}

/// Validated, immutable table: every row has `headers.len()` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
    kinds: Vec<ColumnKind>,
}

impl Table {
    fn from_parts(headers: Vec<String>, rows: Vec<Row>) -> Self {
        let kinds = headers.iter().map(|h| ColumnKind::from_header(h)).collect();
        Self {
            headers,
            rows,
            kinds,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Sort behaviour of a column, `None` when out of range
    pub fn column_kind(&self, column: usize) -> Option<ColumnKind> {
        self.kinds.get(column).copied()
    }
}
