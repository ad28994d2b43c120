//! Case-insensitive substring filter over name and roll.
//!
//! # Invariants
//! - Result order follows the input order.
//! - An empty query matches every record.

use crate::model::record::Record;

/// Lowercased query text matched against `name` and `roll`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordQuery {
    needle: String,
}

impl RecordQuery {
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            needle: text.as_ref().to_lowercase(),
        }
    }

    pub fn text(&self) -> &str {
        &self.needle
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, record: &Record) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        record.name.to_lowercase().contains(&self.needle)
            || record.roll.to_lowercase().contains(&self.needle)
    }
}

/// Returns the matching records, cloned, in input order.
pub fn filter_records(records: &[Record], query: &RecordQuery) -> Vec<Record> {
    records
        .iter()
        .filter(|record| query.matches(record))
        .cloned()
        .collect()
}
