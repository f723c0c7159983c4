//! Error types for the processing pipeline.

use sales_ingest::IngestError;
use sales_model::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The source could not be read or parsed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// A data row failed validation; the whole source is rejected.
    #[error("row {row}: {source}")]
    InvalidRecord {
        /// 1-based data row number (header excluded).
        row: usize,
        #[source]
        source: ValidationError,
    },

    #[error("cannot summarize an empty dataset")]
    EmptyDataset,

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CoreError {
    /// The validation failure behind this error, if any.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            CoreError::InvalidRecord { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
