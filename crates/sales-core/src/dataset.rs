use serde::{Deserialize, Serialize};

use sales_model::{OutputFormat, Record, Summary};

use crate::error::Result;
use crate::summary::{SummaryOutput, summarize, summarize_as};

/// Enriched records of one source, in source row order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// JSON array of the records, one object per row.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.records)?)
    }

    /// Computed on every call; nothing is cached.
    pub fn summary(&self) -> Result<Summary> {
        summarize(&self.records)
    }

    pub fn summary_as(&self, format: OutputFormat) -> Result<SummaryOutput> {
        summarize_as(&self.records, format)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
