//! Per-record profit derivation.
//!
//! Validation runs in a fixed order: the input must be a record, then all of
//! `cost`, `price`, `qty` must be present, then each must be numeric, then
//! `cost` must not be negative. Derived values that leave the finite `f64`
//! range are rejected. Derived fields on the input are replaced.

use sales_model::{
    COST, DERIVED_FIELDS, PRICE, PROFIT, PROFIT_MARGIN, ProcessingOptions, QTY, REQUIRED_FIELDS,
    RawRecord, Record, SKU, ValidationError, ZeroRevenuePolicy,
};
use serde_json::Value;

/// Validate `raw` and build the enriched [`Record`].
///
/// `profit = (price * qty) - (cost * qty)` and
/// `profit_margin = profit / (price * qty)`. Zero revenue follows
/// `options.zero_revenue`.
pub fn enrich(raw: &RawRecord, options: &ProcessingOptions) -> Result<Record, ValidationError> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !raw.contains(field))
        .map(|field| (*field).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields { fields: missing });
    }

    let cost = numeric_field(raw, COST)?;
    let price = numeric_field(raw, PRICE)?;
    let qty = numeric_field(raw, QTY)?;
    if cost < 0.0 {
        return Err(ValidationError::NegativeCost { value: cost });
    }

    let sku = raw.get(SKU).map(ToString::to_string).unwrap_or_default();
    let revenue = price * qty;
    let profit = revenue - cost * qty;
    if !revenue.is_finite() || !profit.is_finite() {
        return Err(ValidationError::Overflow { field: PROFIT, sku });
    }
    let profit_margin = if revenue == 0.0 {
        match options.zero_revenue {
            ZeroRevenuePolicy::ZeroMargin => 0.0,
            ZeroRevenuePolicy::Reject => return Err(ValidationError::ZeroRevenue { sku }),
        }
    } else {
        profit / revenue
    };
    if !profit_margin.is_finite() {
        return Err(ValidationError::Overflow {
            field: PROFIT_MARGIN,
            sku,
        });
    }

    let extra = raw
        .iter()
        .filter(|(name, _)| !is_reserved(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

    Ok(Record {
        sku,
        cost,
        price,
        qty,
        profit,
        profit_margin,
        extra,
    })
}

/// Enrich an untyped JSON value; anything but an object is rejected first.
pub fn enrich_value(value: Value, options: &ProcessingOptions) -> Result<Record, ValidationError> {
    let raw = RawRecord::try_from(value)?;
    enrich(&raw, options)
}

fn numeric_field(raw: &RawRecord, field: &str) -> Result<f64, ValidationError> {
    let value = raw
        .get(field)
        .ok_or_else(|| ValidationError::MissingFields {
            fields: vec![field.to_string()],
        })?;
    value.as_number().ok_or_else(|| ValidationError::NotNumeric {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn is_reserved(name: &str) -> bool {
    name == SKU || REQUIRED_FIELDS.contains(&name) || DERIVED_FIELDS.contains(&name)
}
