//! Record persistence over a single slot.
//!
//! # Responsibility
//! - Load and save the whole record sequence as one JSON array.
//!
//! # Invariants
//! - `load` never fails: missing, malformed or unreadable content reads as
//!   an empty sequence and is logged.
//! - `save` replaces the slot with exactly the given sequence, in order.
//! - `clear` removes the slot; a cleared store loads as empty.

use crate::model::record::Record;
use crate::model::record_list::RecordList;
use crate::repo::slot_store::{RepoResult, SlotStore};
use log::{debug, error};

/// Fixed slot key holding the record array.
pub const RECORDS_SLOT_KEY: &str = "sr_records_v1";

/// Persistence adapter for the record container.
pub struct RecordRepository<S: SlotStore> {
    store: S,
}

impl<S: SlotStore> RecordRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads every stored record in stored order.
    pub fn load(&self) -> Vec<Record> {
        let raw = match self.store.get_slot(RECORDS_SLOT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                error!(
                    "event=records_load module=repo status=error error_code=slot_read_failed error={err}"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Record>>(&raw) {
            Ok(records) => {
                debug!(
                    "event=records_load module=repo status=ok count={}",
                    records.len()
                );
                records
            }
            Err(err) => {
                error!(
                    "event=records_load module=repo status=error error_code=slot_corrupt error={err}"
                );
                Vec::new()
            }
        }
    }

    /// Reads the stored records into a fresh container.
    pub fn load_list(&self) -> RecordList {
        RecordList::from(self.load())
    }

    /// Replaces the stored sequence with `records`.
    pub fn save(&self, records: &[Record]) -> RepoResult<()> {
        let encoded = serde_json::to_string(records)?;
        self.store.set_slot(RECORDS_SLOT_KEY, &encoded)?;
        debug!(
            "event=records_save module=repo status=ok count={}",
            records.len()
        );
        Ok(())
    }

    /// Drops the record slot entirely.
    pub fn clear(&self) -> RepoResult<()> {
        self.store.remove_slot(RECORDS_SLOT_KEY)?;
        debug!("event=records_clear module=repo status=ok");
        Ok(())
    }
}
