//! Raw rows, enriched records and the summary row.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::value::FieldValue;

pub const SKU: &str = "sku";
pub const COST: &str = "cost";
pub const PRICE: &str = "price";
pub const QTY: &str = "qty";
pub const PROFIT: &str = "profit";
pub const PROFIT_MARGIN: &str = "profit_margin";

/// Fields every record must carry before it can be enriched, in check order.
pub const REQUIRED_FIELDS: [&str; 3] = [COST, PRICE, QTY];

/// Fields computed by enrichment; source values under these names are replaced.
pub const DERIVED_FIELDS: [&str; 2] = [PROFIT, PROFIT_MARGIN];

/// Identity value of the summary row.
pub const SUMMARY_SKU: &str = "Summary";

/// One parsed source row: field name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FieldValue> {
        self.fields.iter()
    }

    pub fn into_fields(self) -> BTreeMap<String, FieldValue> {
        self.fields
    }
}

impl FromIterator<(String, FieldValue)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RawRecord {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = btree_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl TryFrom<Value> for RawRecord {
    type Error = ValidationError;

    /// Accept only JSON objects; every other JSON kind is not a record.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(map) = value else {
            return Err(ValidationError::NotARecord {
                found: json_kind(&value),
            });
        };
        Ok(map
            .into_iter()
            .map(|(name, value)| (name, json_to_field(value)))
            .collect())
    }
}

fn json_to_field(value: Value) -> FieldValue {
    match value {
        Value::Null => FieldValue::Missing,
        Value::String(text) => FieldValue::Text(text),
        Value::Number(number) => number
            .as_f64()
            .map_or_else(|| FieldValue::Text(number.to_string()), FieldValue::Number),
        other => FieldValue::Text(other.to_string()),
    }
}

/// Name of a JSON value's kind, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A validated row with derived profit figures.
///
/// Columns other than the six named fields are kept in `extra` and
/// serialized after them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub sku: String,
    pub cost: f64,
    pub price: f64,
    pub qty: f64,
    pub profit: f64,
    pub profit_margin: f64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, FieldValue>,
}

impl Record {
    /// `price * qty`.
    pub fn revenue(&self) -> f64 {
        self.price * self.qty
    }
}

/// Synthetic aggregate row over a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub sku: String,
    /// Mean cost.
    pub cost: f64,
    /// Mean price.
    pub price: f64,
    /// Total quantity.
    pub qty: f64,
    /// Total profit.
    pub profit: f64,
    /// Mean of the per-record margins.
    pub profit_margin: f64,
}
