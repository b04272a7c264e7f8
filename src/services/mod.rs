//! Data sources feeding the table
//!
//! - CSV files and stdin

pub mod csv_source;

pub use csv_source::{load_csv, parse_delimiter, STDIN_PATH};
