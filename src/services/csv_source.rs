//! CSV data source
//!
//! The first record is the header set, every following record a row.
//! Records are read flexibly: a ragged row is passed through so validation
//! can report it, instead of failing the whole load.

use crate::model::TableData;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::info;

/// Path that selects standard input
pub const STDIN_PATH: &str = "-";

/// Load a CSV file, or stdin when `path` is `-`
pub fn load_csv(path: &Path, delimiter: u8) -> Result<TableData> {
    let data = if path.as_os_str() == STDIN_PATH {
        read_csv(io::stdin().lock(), delimiter).context("Failed to read CSV from stdin")?
    } else {
        let file = File::open(path)
            .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
        read_csv(file, delimiter)
            .with_context(|| format!("Failed to read CSV file: {}", path.display()))?
    };

    info!(
        path = %path.display(),
        columns = data.headers.as_ref().map_or(0, Vec::len),
        rows = data.rows.as_ref().map_or(0, Vec::len),
        "loaded csv"
    );
    Ok(data)
}

/// Read headers and rows from any reader
///
/// An input without a single record yields no headers and no rows.
pub fn read_csv<R: Read>(reader: R, delimiter: u8) -> Result<TableData> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut records = reader.records();
    let headers: Vec<String> = match records.next() {
        Some(record) => record
            .context("Failed to read CSV headers")?
            .iter()
            .map(|s| s.trim().to_string())
            .collect(),
        None => return Ok(TableData::default()),
    };

    let mut rows = Vec::new();
    for (index, result) in records.enumerate() {
        let record =
            result.with_context(|| format!("Failed to read CSV record {}", index + 1))?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    Ok(TableData::new(headers, rows))
}

/// Parse a one-character delimiter argument
pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "\\t" | "tab" => Ok(b'\t'),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => Err(format!(
                    "delimiter must be a single ASCII character (got '{}')",
                    value
                )),
            }
        }
    }
}
