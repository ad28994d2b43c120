//! Student record domain model.
//!
//! # Responsibility
//! - Define the record shape and the ordered container backing every use case.
//! - Keep sorting and roll-keyed merge logic free of storage concerns.
//!
//! # Invariants
//! - Every record is identified by its `roll`.
//! - At most one record per roll is kept by service-level writes.

pub mod merge;
pub mod record;
pub mod record_list;
