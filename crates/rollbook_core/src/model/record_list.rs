//! Ordered record container.
//!
//! # Responsibility
//! - Hold records in insertion order, or in the order of the last sort.
//! - Provide positional add/update/delete and in-place selection sorts.
//!
//! # Invariants
//! - Out-of-range `update`/`delete` are silent no-ops.
//! - Sorts only permute records; they never add, drop or duplicate.
//! - Among equal sort keys the earliest-positioned record is placed first.
//! - Roll uniqueness is not checked here.

use crate::model::record::Record;
use std::cmp::Ordering;

/// Direction for container sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Returns the opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Whether `candidate` should replace the current extremum `best`.
    ///
    /// Strict comparison keeps the first extremum found among equal keys.
    fn prefers(self, candidate: Ordering) -> bool {
        match self {
            Self::Ascending => candidate == Ordering::Less,
            Self::Descending => candidate == Ordering::Greater,
        }
    }
}

/// Ordered, mutable sequence of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordList {
    records: Vec<Record>,
}

impl RecordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` at the end.
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Replaces the record at `index`. Ignored when `index` is out of range.
    pub fn update(&mut self, index: usize, record: Record) {
        if let Some(slot) = self.records.get_mut(index) {
            *slot = record;
        }
    }

    /// Removes the record at `index`. Ignored when `index` is out of range.
    pub fn delete(&mut self, index: usize) {
        if index < self.records.len() {
            self.records.remove(index);
        }
    }

    /// Returns an owned snapshot in current order.
    pub fn to_vec(&self) -> Vec<Record> {
        self.records.clone()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    /// Index of the first record whose roll equals `roll`.
    pub fn position_by_roll(&self, roll: &str) -> Option<usize> {
        self.records.iter().position(|record| record.roll == roll)
    }

    /// Reorders by `marks` in place.
    pub fn sort_by_marks(&mut self, order: SortOrder) {
        self.selection_sort(order, |a, b| a.marks.cmp(&b.marks));
    }

    /// Reorders by `roll` in place.
    ///
    /// Rolls compare by UTF-8 bytes (Unicode scalar order), not UTF-16 code
    /// units; the two disagree only for rolls mixing U+E000..=U+FFFF with
    /// characters outside the Basic Multilingual Plane.
    pub fn sort_by_roll(&mut self, order: SortOrder) {
        self.selection_sort(order, |a, b| a.roll.cmp(&b.roll));
    }

    /// Repeatedly selects the extremum of the unsorted tail and moves it to
    /// the end of the sorted prefix.
    ///
    /// The move is a rotation, so the unselected records keep their relative
    /// order; together with the strict comparison this places equal keys in
    /// their original order. O(n^2) comparisons, O(1) extra space.
    fn selection_sort<F>(&mut self, order: SortOrder, compare: F)
    where
        F: Fn(&Record, &Record) -> Ordering,
    {
        let len = self.records.len();
        if len < 2 {
            return;
        }

        for sorted_len in 0..len - 1 {
            let mut target = sorted_len;
            for candidate in sorted_len + 1..len {
                if order.prefers(compare(&self.records[candidate], &self.records[target])) {
                    target = candidate;
                }
            }
            if target != sorted_len {
                self.records[sorted_len..=target].rotate_right(1);
            }
        }
    }
}

impl From<Vec<Record>> for RecordList {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for RecordList {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordList {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for RecordList {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
