//! Tabular (comma-separated) import and export.
//!
//! # Responsibility
//! - Parse externally supplied CSV text into validated record batches.
//! - Render record snapshots as quoted CSV for download/export.
//!
//! # Invariants
//! - Import never fails per row: invalid rows are counted and skipped.
//! - Export quotes every field, so it re-imports without loss.

pub mod csv_export;
pub mod csv_import;
