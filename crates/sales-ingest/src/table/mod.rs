//! CSV reading.

mod header;
mod reader;

pub use header::{CsvHeaders, normalize_header};
pub use reader::{parse_csv, read_csv_file};
