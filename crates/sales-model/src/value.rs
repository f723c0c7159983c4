//! Cell values and numeric parsing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single field value of a [`crate::RawRecord`].
///
/// Serialized untagged: a JSON number, a JSON string, or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Missing,
}

impl FieldValue {
    /// Build a value from a CSV cell; blank cells are [`FieldValue::Missing`].
    pub fn from_cell(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            FieldValue::Missing
        } else {
            FieldValue::Text(trimmed.to_string())
        }
    }

    /// Numeric view of the value, accepting integer and decimal text.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) => value.is_finite().then_some(*value),
            FieldValue::Text(text) => parse_numeric(text),
            FieldValue::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(value) => write!(f, "{value}"),
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Missing => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

/// Parse a decimal literal such as `12`, `-3.5`, `.5`, `1e3`.
///
/// Surrounding whitespace is allowed. `inf`, `NaN`, hex literals and values
/// that overflow to infinity are rejected.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if !is_decimal_literal(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn is_decimal_literal(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut idx = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        idx += 1;
    }
    let int_digits = count_digits(&bytes[idx..]);
    idx += int_digits;
    let mut frac_digits = 0;
    if bytes.get(idx) == Some(&b'.') {
        idx += 1;
        frac_digits = count_digits(&bytes[idx..]);
        idx += frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return false;
    }
    if matches!(bytes.get(idx), Some(b'e' | b'E')) {
        idx += 1;
        if matches!(bytes.get(idx), Some(b'+' | b'-')) {
            idx += 1;
        }
        let exp_digits = count_digits(&bytes[idx..]);
        if exp_digits == 0 {
            return false;
        }
        idx += exp_digits;
    }
    idx == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
