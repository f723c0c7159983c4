//! Sales data ingestion.
//!
//! Turns a delimited text source (first row = header) into an ordered
//! sequence of [`RawRecord`]s, one per data row.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use sales_ingest::read_csv_file;
//! use sales_model::ColumnMismatchMode;
//!
//! let records = read_csv_file(Path::new("sales.csv"), ColumnMismatchMode::Truncate)?;
//! ```
//!
//! [`RawRecord`]: sales_model::RawRecord

mod error;
mod json;
mod source;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use table::{CsvHeaders, normalize_header, parse_csv, read_csv_file};

// === JSON Reading ===
pub use json::{parse_json_records, read_json_file};
