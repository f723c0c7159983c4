//! Data model for the sales profit pipeline.
//!
//! - [`RawRecord`]: one parsed source row, field name to [`FieldValue`]
//! - [`Record`]: a validated row with derived `profit` and `profit_margin`
//! - [`Summary`]: the synthetic aggregate row for a whole dataset
//! - [`ProcessingOptions`]: policies for column mismatches and zero revenue

pub mod error;
pub mod options;
pub mod processing;
pub mod record;
pub mod value;

pub use error::ValidationError;
pub use options::{ColumnMismatchMode, ProcessingOptions, ZeroRevenuePolicy};
pub use processing::OutputFormat;
pub use record::{
    COST, DERIVED_FIELDS, PRICE, PROFIT, PROFIT_MARGIN, QTY, REQUIRED_FIELDS, RawRecord, Record,
    SKU, SUMMARY_SKU, Summary, json_kind,
};
pub use value::{FieldValue, parse_numeric};
