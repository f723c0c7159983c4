//! CSV source reading.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use sales_model::{ColumnMismatchMode, RawRecord};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::source::with_source_file;

use super::header::CsvHeaders;

/// Parse CSV text from `reader` into one [`RawRecord`] per data row.
///
/// The first non-blank row is the header; blank rows before it are skipped.
/// After the header every row the reader yields is mapped, including rows
/// whose cells are all empty, so they fail validation downstream. An empty
/// or header-only source yields an empty vector.
pub fn parse_csv<R: Read>(reader: R, mode: ColumnMismatchMode) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut headers: Option<CsvHeaders> = None;
    let mut records = Vec::new();
    let mut row = StringRecord::new();
    while reader.read_record(&mut row)? {
        let Some(header) = headers.as_ref() else {
            if is_blank(&row) {
                continue;
            }
            let header = CsvHeaders::from_record(&row);
            debug!(columns = ?header.columns, "read header row");
            headers = Some(header);
            continue;
        };
        if row.len() != header.len() {
            let line = row.position().map_or(0, csv::Position::line);
            match mode {
                ColumnMismatchMode::Reject => {
                    return Err(IngestError::ColumnCountMismatch {
                        line,
                        expected: header.len(),
                        found: row.len(),
                    });
                }
                ColumnMismatchMode::Truncate => {
                    warn!(
                        line,
                        expected = header.len(),
                        found = row.len(),
                        "row width differs from header, mapping overlapping columns only"
                    );
                }
            }
        }
        records.push(header.map_row(&row));
    }

    debug!(rows = records.len(), "parsed csv source");
    Ok(records)
}

/// Read a CSV file into raw records.
///
/// The file is opened and closed within this call.
pub fn read_csv_file(path: &Path, mode: ColumnMismatchMode) -> Result<Vec<RawRecord>> {
    debug!(path = %path.display(), "reading csv file");
    with_source_file(path, |file| parse_csv(file, mode))
}

fn is_blank(row: &StringRecord) -> bool {
    row.iter().all(|value| value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_model::FieldValue;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn parse(content: &str) -> Result<Vec<RawRecord>> {
        parse_csv(content.as_bytes(), ColumnMismatchMode::Truncate)
    }

    #[test]
    fn test_parse_one_record_per_data_row() {
        let records = parse("sku,cost,price,qty\nSKU1,10,15,2\nSKU2,5,5,10\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("sku"), Some(&FieldValue::from("SKU1")));
        assert_eq!(records[1].get("qty"), Some(&FieldValue::from("10")));
    }

    #[test]
    fn test_parse_empty_and_header_only() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("sku,cost,price,qty\n").unwrap().is_empty());
        assert!(parse("sku,cost,price,qty").unwrap().is_empty());
    }

    #[test]
    fn test_parse_skips_blank_rows_before_header() {
        let records = parse("\n,\n  \nsku,qty\nSKU1,1\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("sku"), Some(&FieldValue::from("SKU1")));
    }

    #[test]
    fn test_parse_keeps_empty_cell_rows_after_header() {
        let records = parse("sku,cost,price,qty\nA,1,2,3\n,,,\nB,1,2,3\n").unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].get("sku"), Some(&FieldValue::Missing));
        assert_eq!(records[1].get("cost"), Some(&FieldValue::Missing));
        assert_eq!(records[2].get("sku"), Some(&FieldValue::from("B")));
    }

    #[test]
    fn test_parse_quoted_fields() {
        let records = parse("sku,name\n\"A,1\",\"say \"\"hi\"\"\nthere\"\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("sku"), Some(&FieldValue::from("A,1")));
        assert_eq!(
            records[0].get("name"),
            Some(&FieldValue::from("say \"hi\"\nthere"))
        );
    }

    #[test]
    fn test_parse_strips_bom() {
        let records = parse("\u{feff}sku,qty\nSKU1,3\n").unwrap();
        assert_eq!(records[0].get("sku"), Some(&FieldValue::from("SKU1")));
    }

    #[test]
    fn test_parse_rejects_ragged_rows_when_strict() {
        let err = parse_csv(
            "sku,cost\nSKU1,1\nSKU2\n".as_bytes(),
            ColumnMismatchMode::Reject,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            IngestError::ColumnCountMismatch {
                line: 3,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_parse_invalid_utf8() {
        let bytes: &[u8] = b"sku,qty\n\xff\xfe,1\n";
        let err = parse_csv(bytes, ColumnMismatchMode::Truncate).unwrap_err();
        assert!(matches!(err, IngestError::CsvParse { .. }));
    }

    #[test]
    fn test_read_csv_file() {
        let file = create_temp_csv("sku,cost,price,qty\nSKU1,10,15,2\n");
        let records = read_csv_file(file.path(), ColumnMismatchMode::Truncate).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_read_csv_file_not_found() {
        let result = read_csv_file(
            Path::new("/nonexistent/sales.csv"),
            ColumnMismatchMode::Truncate,
        );
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
