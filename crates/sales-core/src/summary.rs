//! Dataset-level aggregation.

use sales_model::{OutputFormat, Record, SUMMARY_SKU, Summary};

use crate::error::{CoreError, Result};

/// A summary in the shape requested by an [`OutputFormat`].
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryOutput {
    Structured(Summary),
    Json(String),
}

impl SummaryOutput {
    /// The structured summary, if that is the shape that was requested.
    pub fn as_summary(&self) -> Option<&Summary> {
        match self {
            SummaryOutput::Structured(summary) => Some(summary),
            SummaryOutput::Json(_) => None,
        }
    }
}

#[derive(Default)]
struct Totals {
    cost: f64,
    price: f64,
    qty: f64,
    profit: f64,
    profit_margin: f64,
}

/// Aggregate enriched records into one summary row.
///
/// `cost`, `price` and `profit_margin` are means over the records; `qty` and
/// `profit` are sums. The margin is the mean of the per-record margins, not
/// total profit over total revenue.
pub fn summarize(records: &[Record]) -> Result<Summary> {
    if records.is_empty() {
        return Err(CoreError::EmptyDataset);
    }
    let totals = records.iter().fold(Totals::default(), |mut totals, record| {
        totals.cost += record.cost;
        totals.price += record.price;
        totals.qty += record.qty;
        totals.profit += record.profit;
        totals.profit_margin += record.profit_margin;
        totals
    });
    let count = records.len() as f64;
    Ok(Summary {
        sku: SUMMARY_SKU.to_string(),
        cost: totals.cost / count,
        price: totals.price / count,
        qty: totals.qty,
        profit: totals.profit,
        profit_margin: totals.profit_margin / count,
    })
}

/// Summarize and render in the requested format.
pub fn summarize_as(records: &[Record], format: OutputFormat) -> Result<SummaryOutput> {
    let summary = summarize(records)?;
    Ok(match format {
        OutputFormat::Array => SummaryOutput::Structured(summary),
        OutputFormat::Json => SummaryOutput::Json(serde_json::to_string(&summary)?),
    })
}
