//! CSV header normalization and positional row mapping.

use csv::StringRecord;
use sales_model::{FieldValue, RawRecord};

/// Column names taken from the first row of a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Normalized column names, in source order.
    pub columns: Vec<String>,
}

impl CsvHeaders {
    /// Build headers from the raw header row.
    pub fn from_record(record: &StringRecord) -> Self {
        Self {
            columns: record.iter().map(normalize_header).collect(),
        }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Map a data row onto the header by position.
    ///
    /// Only the overlapping columns are mapped: cells past the last header
    /// are dropped and columns past the last cell stay absent. A repeated
    /// column name keeps its rightmost value.
    pub fn map_row(&self, row: &StringRecord) -> RawRecord {
        self.columns
            .iter()
            .zip(row.iter())
            .map(|(name, cell)| (name.clone(), FieldValue::from_cell(cell)))
            .collect()
    }
}

/// Normalizes a header value by trimming whitespace and any byte order mark.
pub fn normalize_header(value: &str) -> String {
    value.trim().trim_matches('\u{feff}').trim().to_string()
}
