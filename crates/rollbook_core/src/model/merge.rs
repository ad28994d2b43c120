//! Roll-keyed upsert of imported batches.
//!
//! # Invariants
//! - A candidate whose roll already exists replaces that record in place.
//! - Any other candidate is appended, in batch order.
//! - Applying the same batch twice leaves the same state as applying it once.

use crate::model::record::Record;
use crate::model::record_list::RecordList;
use std::collections::HashMap;

/// Outcome counters for one merged batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Candidates applied (`updated + inserted`).
    pub processed: usize,
    /// Candidates that replaced an existing record.
    pub updated: usize,
    /// Candidates appended as new records.
    pub inserted: usize,
}

/// Upserts every candidate of `batch` into `list` by roll.
///
/// Candidates must already be validated. Rolls appended earlier in the same
/// batch are matched too, so a repeated roll never produces a duplicate.
pub fn merge_records(
    list: &mut RecordList,
    batch: impl IntoIterator<Item = Record>,
) -> MergeSummary {
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(list.len());
    for (index, record) in list.iter().enumerate() {
        positions.entry(record.roll.clone()).or_insert(index);
    }

    let mut summary = MergeSummary::default();
    for candidate in batch {
        match positions.get(&candidate.roll) {
            Some(&index) => {
                list.update(index, candidate);
                summary.updated += 1;
            }
            None => {
                positions.insert(candidate.roll.clone(), list.len());
                list.add(candidate);
                summary.inserted += 1;
            }
        }
        summary.processed += 1;
    }

    summary
}
