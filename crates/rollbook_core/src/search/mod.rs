//! Record lookup entry points.
//!
//! # Responsibility
//! - Filter record snapshots by free-text queries for list views.

pub mod query;
