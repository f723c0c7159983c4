//! Sales processing core.
//!
//! # Pipeline Order
//!
//! 1. **Ingest** - parse the source into raw records (`sales-ingest`)
//! 2. **Enrich** - validate each record and derive `profit` / `profit_margin`
//! 3. **Summarize** - on demand, aggregate the enriched records into one row
//!
//! # Example
//!
//! ```ignore
//! use sales_core::{ProcessingOptions, process_file};
//!
//! let dataset = process_file(Path::new("sales.csv"), &ProcessingOptions::default())?;
//! let summary = dataset.summary()?;
//! println!("{}", dataset.to_json()?);
//! ```

pub mod dataset;
pub mod enrich;
pub mod error;
pub mod pipeline;
pub mod summary;

pub use dataset::Dataset;
pub use enrich::{enrich, enrich_value};
pub use error::{CoreError, Result};
pub use pipeline::{
    InputFormat, enrich_all, process_file, process_json_file, process_json_reader, process_path,
    process_reader,
};
pub use sales_model::{
    ColumnMismatchMode, OutputFormat, ProcessingOptions, Record, Summary, ValidationError,
    ZeroRevenuePolicy,
};
pub use summary::{SummaryOutput, summarize, summarize_as};
