//! SQLite backing for the key-value slot store.
//!
//! # Responsibility
//! - Open SQLite connections holding the `kv_slots` table.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Slots are never read or written before migrations succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failures while opening or upgrading the record store.
#[derive(Debug)]
pub enum DbError {
    /// Connection setup or a statement outside a migration failed.
    Store(rusqlite::Error),
    /// Migration `version` could not be applied; nothing from the batch
    /// was committed.
    Migration {
        version: u32,
        source: rusqlite::Error,
    },
    /// The file was written by a newer RollBook build.
    NewerSchema { found: u32, supported: u32 },
}

impl DbError {
    /// Whether retrying with a newer binary could succeed.
    pub fn is_newer_schema(&self) -> bool {
        matches!(self, Self::NewerSchema { .. })
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "record store unavailable: {err}"),
            Self::Migration { version, source } => {
                write!(f, "record store upgrade to v{version} failed: {source}")
            }
            Self::NewerSchema { found, supported } => write!(
                f,
                "record store is at v{found} but this build only reads up to v{supported}; upgrade rollbook"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) | Self::Migration { source: err, .. } => Some(err),
            Self::NewerSchema { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Store(value)
    }
}
