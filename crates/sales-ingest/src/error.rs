//! Error types for sales data ingestion.

use std::path::PathBuf;

use sales_model::ValidationError;
use thiserror::Error;

/// Errors that can occur while reading a source into raw records.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Source Errors ===
    /// Source file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Source file exists but could not be opened or read.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The underlying byte stream failed.
    #[error("failed to read source: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    // === CSV Errors ===
    /// Malformed CSV (for example invalid UTF-8).
    #[error("failed to parse CSV at line {line}: {message}")]
    CsvParse { line: u64, message: String },

    /// A data row is wider or narrower than the header.
    #[error("line {line} has {found} fields but the header has {expected}")]
    ColumnCountMismatch {
        line: u64,
        expected: usize,
        found: usize,
    },

    // === JSON Errors ===
    /// The JSON document could not be parsed.
    #[error("failed to parse JSON: {source}")]
    JsonParse {
        #[source]
        source: serde_json::Error,
    },

    /// The JSON document is not an array of records.
    #[error("expected a JSON array of records, found {found}")]
    NotAList { found: &'static str },

    /// An array element is not a record.
    #[error("element {index} is not a record: {source}")]
    NotARecord {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

impl IngestError {
    /// Attach a path to stream-level read failures.
    pub(crate) fn with_path(self, path: &std::path::Path) -> Self {
        match self {
            IngestError::Read { source } => IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map_or(0, csv::Position::line);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Self::Read { source },
            _ => Self::CsvParse { line, message },
        }
    }
}

impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Read {
                source: std::io::Error::from(err),
            }
        } else {
            Self::JsonParse { source: err }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
