//! Core domain logic for RollBook, a local student-record keeper.
//! This crate is the single source of truth for record invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod transfer;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::merge::{merge_records, MergeSummary};
pub use model::record::{parse_marks, Record, RecordInput, RecordValidationError};
pub use model::record_list::{RecordList, SortOrder};
pub use repo::record_repo::{RecordRepository, RECORDS_SLOT_KEY};
pub use repo::slot_store::{MemorySlotStore, RepoError, RepoResult, SlotStore, SqliteSlotStore};
pub use search::query::{filter_records, RecordQuery};
pub use service::record_service::{
    ImportReport, RecordService, SaveOutcome, ServiceError, ServiceResult, SortedView,
};
pub use service::session::Session;
pub use transfer::csv_export::{csv_row, export_csv, CSV_HEADER};
pub use transfer::csv_import::{parse_csv_line, parse_records, ImportBatch};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
