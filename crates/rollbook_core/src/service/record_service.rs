//! Record use-case service.
//!
//! # Responsibility
//! - Provide add/edit/delete/sort/clear/import/export entry points.
//! - Enforce form validation and roll uniqueness before any write.
//!
//! # Invariants
//! - Every use case reloads from the repository before mutating and
//!   persists the full snapshot afterwards.
//! - A rejected operation leaves stored state untouched.
//! - At most one record per roll is ever persisted by this service.

use crate::model::merge::merge_records;
use crate::model::record::{Record, RecordInput, RecordValidationError};
use crate::model::record_list::{RecordList, SortOrder};
use crate::repo::record_repo::RecordRepository;
use crate::repo::slot_store::{RepoError, SlotStore};
use crate::search::query::{filter_records, RecordQuery};
use crate::service::session::Session;
use crate::transfer::csv_export::export_csv;
use crate::transfer::csv_import::{parse_records, split_lines};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for record use cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Form input is incomplete or `marks` is not an integer.
    Validation(RecordValidationError),
    /// Another record already uses this roll.
    DuplicateRoll(String),
    /// No record has this roll.
    RecordNotFound(String),
    /// Import text contains no lines.
    EmptyImport,
    /// Import text has lines but none of them is a valid row.
    NoValidRows { skipped_rows: usize },
    /// Export was requested with no stored records.
    NothingToExport,
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "please fill all fields correctly: {err}"),
            Self::DuplicateRoll(roll) => {
                write!(f, "roll `{roll}` already exists; choose a unique roll")
            }
            Self::RecordNotFound(roll) => write!(f, "no record with roll `{roll}`"),
            Self::EmptyImport => write!(f, "empty CSV file"),
            Self::NoValidRows { skipped_rows } => {
                write!(f, "no valid rows found ({skipped_rows} skipped)")
            }
            Self::NothingToExport => write!(f, "no records to export"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RecordValidationError> for ServiceError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Result of a session-driven save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Added(Record),
    Updated(Record),
}

/// Records in the order produced by a sort, with the direction applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedView {
    pub order: SortOrder,
    pub records: Vec<Record>,
}

/// Counters reported after a merged import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    /// Valid rows merged (the user-facing "imported" count).
    pub processed: usize,
    pub updated: usize,
    pub inserted: usize,
    pub skipped_rows: usize,
}

#[derive(Debug, Clone, Copy)]
enum SortKey {
    Marks,
    Roll,
}

impl SortKey {
    fn label(self) -> &'static str {
        match self {
            Self::Marks => "marks",
            Self::Roll => "roll",
        }
    }
}

/// Use-case facade over a record repository.
pub struct RecordService<S: SlotStore> {
    repo: RecordRepository<S>,
}

impl<S: SlotStore> RecordService<S> {
    /// Creates a service persisting through `store`.
    pub fn new(store: S) -> Self {
        Self {
            repo: RecordRepository::new(store),
        }
    }

    pub fn repository(&self) -> &RecordRepository<S> {
        &self.repo
    }

    /// Validates `input` and appends it as a new record.
    ///
    /// # Errors
    /// - `Validation` for missing fields or non-integer marks.
    /// - `DuplicateRoll` when the roll is already stored.
    pub fn add_record(&self, input: &RecordInput) -> ServiceResult<Record> {
        let record = input.parse()?;
        let mut list = self.repo.load_list();

        if list.position_by_roll(&record.roll).is_some() {
            return Err(ServiceError::DuplicateRoll(record.roll));
        }

        list.add(record.clone());
        self.persist(&list)?;
        info!(
            "event=record_add module=service status=ok count={}",
            list.len()
        );
        Ok(record)
    }

    /// Replaces the record currently stored under `original_roll`.
    ///
    /// The record keeps its position. Changing the roll is allowed as long
    /// as no other record uses the new one.
    pub fn update_record(&self, original_roll: &str, input: &RecordInput) -> ServiceResult<Record> {
        let record = input.parse()?;
        let mut list = self.repo.load_list();

        let index = list
            .position_by_roll(original_roll)
            .ok_or_else(|| ServiceError::RecordNotFound(original_roll.to_string()))?;

        if record.roll != original_roll
            && list
                .iter()
                .enumerate()
                .any(|(i, existing)| i != index && existing.roll == record.roll)
        {
            return Err(ServiceError::DuplicateRoll(record.roll));
        }

        list.update(index, record.clone());
        self.persist(&list)?;
        info!("event=record_update module=service status=ok index={index}");
        Ok(record)
    }

    /// Puts `session` into edit mode for `roll` and returns the record to
    /// prefill the form with.
    pub fn begin_edit(&self, session: &mut Session, roll: &str) -> ServiceResult<Record> {
        let record = self
            .get_record(roll)
            .ok_or_else(|| ServiceError::RecordNotFound(roll.to_string()))?;
        session.set_edit_target(record.roll.clone());
        Ok(record)
    }

    /// Saves form input as an edit when `session` targets a record,
    /// otherwise as a new record. Edit mode ends after a successful edit.
    pub fn save_from_session(
        &self,
        session: &mut Session,
        input: &RecordInput,
    ) -> ServiceResult<SaveOutcome> {
        match session.edit_target().map(str::to_owned) {
            Some(roll) => {
                let record = self.update_record(&roll, input)?;
                session.cancel_edit();
                Ok(SaveOutcome::Updated(record))
            }
            None => self.add_record(input).map(SaveOutcome::Added),
        }
    }

    /// Removes the record stored under `roll`.
    pub fn delete_record(&self, roll: &str) -> ServiceResult<Record> {
        let mut list = self.repo.load_list();
        let (index, removed) = list
            .position_by_roll(roll)
            .and_then(|index| list.get(index).cloned().map(|record| (index, record)))
            .ok_or_else(|| ServiceError::RecordNotFound(roll.to_string()))?;

        list.delete(index);
        self.persist(&list)?;
        info!("event=record_delete module=service status=ok index={index}");
        Ok(removed)
    }

    pub fn get_record(&self, roll: &str) -> Option<Record> {
        self.repo
            .load()
            .into_iter()
            .find(|record| record.roll == roll)
    }

    /// Returns every stored record in stored order.
    pub fn list_records(&self) -> Vec<Record> {
        self.repo.load()
    }

    /// Returns stored records whose name or roll contains `text`,
    /// ignoring case.
    pub fn search(&self, text: &str) -> Vec<Record> {
        filter_records(&self.repo.load(), &RecordQuery::new(text))
    }

    /// Sorts stored records by marks and persists the new order.
    pub fn sort_by_marks(&self, order: SortOrder) -> ServiceResult<Vec<Record>> {
        self.sort_and_persist(SortKey::Marks, order)
    }

    /// Sorts stored records by roll and persists the new order.
    pub fn sort_by_roll(&self, order: SortOrder) -> ServiceResult<Vec<Record>> {
        self.sort_and_persist(SortKey::Roll, order)
    }

    /// Sorts by marks in the session's toggled direction.
    pub fn toggle_sort_by_marks(&self, session: &mut Session) -> ServiceResult<SortedView> {
        self.toggle_sort(session, SortKey::Marks)
    }

    /// Sorts by roll in the session's toggled direction.
    pub fn toggle_sort_by_roll(&self, session: &mut Session) -> ServiceResult<SortedView> {
        self.toggle_sort(session, SortKey::Roll)
    }

    /// Deletes every stored record and returns how many were removed.
    pub fn clear_all(&self) -> ServiceResult<usize> {
        let removed = self.repo.load().len();
        self.repo.clear()?;
        info!("event=records_clear module=service status=ok removed={removed}");
        Ok(removed)
    }

    /// Parses CSV `text` and upserts its valid rows by roll.
    ///
    /// # Errors
    /// - `EmptyImport` when `text` has no non-empty line.
    /// - `NoValidRows` when every data row was skipped.
    pub fn import_csv(&self, text: &str) -> ServiceResult<ImportReport> {
        if split_lines(text).is_empty() {
            return Err(ServiceError::EmptyImport);
        }

        let batch = parse_records(text);
        if batch.is_empty() {
            warn!(
                "event=records_import module=service status=rejected skipped_rows={}",
                batch.skipped_rows
            );
            return Err(ServiceError::NoValidRows {
                skipped_rows: batch.skipped_rows,
            });
        }

        let skipped_rows = batch.skipped_rows;
        let mut list = self.repo.load_list();
        let summary = merge_records(&mut list, batch.records);
        self.persist(&list)?;

        info!(
            "event=records_import module=service status=ok processed={} updated={} inserted={} skipped_rows={}",
            summary.processed, summary.updated, summary.inserted, skipped_rows
        );
        Ok(ImportReport {
            processed: summary.processed,
            updated: summary.updated,
            inserted: summary.inserted,
            skipped_rows,
        })
    }

    /// Renders every stored record as CSV.
    pub fn export_csv(&self) -> ServiceResult<String> {
        let records = self.repo.load();
        if records.is_empty() {
            return Err(ServiceError::NothingToExport);
        }
        Ok(export_csv(&records))
    }

    fn toggle_sort(&self, session: &mut Session, key: SortKey) -> ServiceResult<SortedView> {
        let order = session.next_sort_order();
        let records = self.sort_and_persist(key, order)?;
        Ok(SortedView { order, records })
    }

    fn sort_and_persist(&self, key: SortKey, order: SortOrder) -> ServiceResult<Vec<Record>> {
        let mut list = self.repo.load_list();
        match key {
            SortKey::Marks => list.sort_by_marks(order),
            SortKey::Roll => list.sort_by_roll(order),
        }
        self.persist(&list)?;
        info!(
            "event=records_sort module=service status=ok key={} order={:?} count={}",
            key.label(),
            order,
            list.len()
        );
        Ok(list.to_vec())
    }

    fn persist(&self, list: &RecordList) -> ServiceResult<()> {
        self.repo.save(list.as_slice())?;
        Ok(())
    }
}
