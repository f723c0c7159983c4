use thiserror::Error;

/// Reasons a single record cannot be enriched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The input was not a field-name-to-value mapping.
    #[error("invalid input, only records are accepted; input was: {found}")]
    NotARecord { found: &'static str },

    /// One or more of `cost`, `price`, `qty` is absent.
    #[error("invalid record, the following keys are required: {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },

    /// A required field holds something that is not a number.
    #[error("value of '{field}' is not a valid number: '{value}'")]
    NotNumeric { field: String, value: String },

    /// `cost` is below zero.
    #[error("value of 'cost' must not be negative: {value}")]
    NegativeCost { value: f64 },

    /// `price * qty` is zero and the active policy rejects such rows.
    #[error("revenue is zero for sku '{sku}', profit margin is undefined")]
    ZeroRevenue { sku: String },

    /// A derived value does not fit in a finite `f64`.
    #[error("value of '{field}' overflows for sku '{sku}'")]
    Overflow { field: &'static str, sku: String },
}
