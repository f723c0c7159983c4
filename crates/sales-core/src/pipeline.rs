//! Source-to-dataset processing.
//!
//! Every entry point reads its source to completion, enriches each row in
//! order, and stops at the first invalid row. Nothing is shared between
//! calls.

use std::io::Read;
use std::path::Path;

use sales_ingest::{parse_csv, parse_json_records, read_csv_file, read_json_file};
use sales_model::{ProcessingOptions, RawRecord};
use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::enrich::enrich;
use crate::error::{CoreError, Result};

/// Layout of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Comma-separated text with a header row.
    #[default]
    Csv,
    /// JSON array of objects.
    Json,
}

impl InputFormat {
    /// Guess the format from a file extension, defaulting to CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Csv,
        }
    }
}

/// Enrich parsed records, failing on the first invalid row.
pub fn enrich_all(raws: &[RawRecord], options: &ProcessingOptions) -> Result<Dataset> {
    let records = raws
        .iter()
        .enumerate()
        .map(|(idx, raw)| {
            enrich(raw, options).map_err(|source| CoreError::InvalidRecord {
                row: idx + 1,
                source,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    info!(rows = records.len(), "enriched dataset");
    Ok(Dataset::new(records))
}

/// Process CSV text from any reader.
pub fn process_reader<R: Read>(reader: R, options: &ProcessingOptions) -> Result<Dataset> {
    let raws = parse_csv(reader, options.column_mismatch)?;
    enrich_all(&raws, options)
}

/// Process a JSON array of records from any reader.
pub fn process_json_reader<R: Read>(reader: R, options: &ProcessingOptions) -> Result<Dataset> {
    let raws = parse_json_records(reader)?;
    enrich_all(&raws, options)
}

/// Process a CSV file. The file is closed before this returns.
pub fn process_file(path: &Path, options: &ProcessingOptions) -> Result<Dataset> {
    debug!(path = %path.display(), "processing csv file");
    let raws = read_csv_file(path, options.column_mismatch)?;
    enrich_all(&raws, options)
}

/// Process a JSON file. The file is closed before this returns.
pub fn process_json_file(path: &Path, options: &ProcessingOptions) -> Result<Dataset> {
    debug!(path = %path.display(), "processing json file");
    let raws = read_json_file(path)?;
    enrich_all(&raws, options)
}

/// Process a file in the given format.
pub fn process_path(
    path: &Path,
    format: InputFormat,
    options: &ProcessingOptions,
) -> Result<Dataset> {
    match format {
        InputFormat::Csv => process_file(path, options),
        InputFormat::Json => process_json_file(path, options),
    }
}
