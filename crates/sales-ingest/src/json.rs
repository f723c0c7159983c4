//! JSON array sources.
//!
//! Reads back the record arrays the pipeline writes, so a serialized dataset
//! can be fed through enrichment again.

use std::io::{BufReader, Read};
use std::path::Path;

use sales_model::{RawRecord, json_kind};
use serde_json::Value;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::source::with_source_file;

/// Parse a JSON array of objects into raw records, preserving array order.
pub fn parse_json_records<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let document: Value = serde_json::from_reader(BufReader::new(reader))?;
    let Value::Array(items) = document else {
        return Err(IngestError::NotAList {
            found: json_kind(&document),
        });
    };
    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            RawRecord::try_from(item).map_err(|source| IngestError::NotARecord { index, source })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(rows = records.len(), "parsed json source");
    Ok(records)
}

/// Read a JSON file into raw records.
pub fn read_json_file(path: &Path) -> Result<Vec<RawRecord>> {
    debug!(path = %path.display(), "reading json file");
    with_source_file(path, parse_json_records)
}
