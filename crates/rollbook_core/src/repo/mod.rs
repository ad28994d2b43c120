//! Persistence layer for record snapshots.
//!
//! # Responsibility
//! - Define the opaque key-value slot transport and its implementations.
//! - Serialize the record container into a single slot and back.
//!
//! # Invariants
//! - Reads of corrupted content recover locally as an empty sequence.
//! - Write failures are returned to the caller unchanged.

pub mod record_repo;
pub mod slot_store;
