//! Configuration options for sales processing.

use serde::{Deserialize, Serialize};

/// What to do when a data row has a different number of cells than the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColumnMismatchMode {
    /// Map only the overlapping columns; surplus cells are dropped and
    /// absent cells stay absent.
    #[default]
    Truncate,
    /// Fail the whole source on the first mismatched row.
    Reject,
}

/// Profit margin policy for rows whose revenue (`price * qty`) is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZeroRevenuePolicy {
    /// Report a margin of `0.0`.
    #[default]
    ZeroMargin,
    /// Fail the row with [`crate::ValidationError::ZeroRevenue`].
    Reject,
}

/// Options controlling ingestion and enrichment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingOptions {
    pub column_mismatch: ColumnMismatchMode,
    pub zero_revenue: ZeroRevenuePolicy,
}

impl ProcessingOptions {
    /// Create options that reject ragged rows and zero-revenue rows.
    pub fn strict() -> Self {
        Self {
            column_mismatch: ColumnMismatchMode::Reject,
            zero_revenue: ZeroRevenuePolicy::Reject,
        }
    }

    #[must_use]
    pub fn with_column_mismatch(mut self, mode: ColumnMismatchMode) -> Self {
        self.column_mismatch = mode;
        self
    }

    #[must_use]
    pub fn with_zero_revenue(mut self, policy: ZeroRevenuePolicy) -> Self {
        self.zero_revenue = policy;
        self
    }
}
