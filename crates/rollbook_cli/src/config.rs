//! Runtime settings resolved from flags and environment.
//!
//! # Invariants
//! - Explicit flags win over environment variables, which win over defaults.
//! - Blank environment values are treated as unset.

use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "ROLLBOOK_DB_PATH";
pub const LOG_DIR_ENV: &str = "ROLLBOOK_LOG_DIR";
const DEFAULT_DB_FILE_NAME: &str = "rollbook.sqlite3";

/// Effective settings for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub db_path: PathBuf,
    /// Logging stays off when `None`.
    pub log_dir: Option<String>,
    pub log_level: String,
}

impl Settings {
    /// Resolves settings using the process environment.
    pub fn resolve(
        db_flag: Option<PathBuf>,
        log_dir_flag: Option<String>,
        log_level_flag: Option<String>,
    ) -> Self {
        Self::resolve_with(db_flag, log_dir_flag, log_level_flag, |key| {
            std::env::var(key).ok()
        })
    }

    fn resolve_with(
        db_flag: Option<PathBuf>,
        log_dir_flag: Option<String>,
        log_level_flag: Option<String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let non_blank = |key: &str| {
            env(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let db_path = db_flag
            .or_else(|| non_blank(DB_PATH_ENV).map(PathBuf::from))
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
        let log_dir = log_dir_flag.or_else(|| non_blank(LOG_DIR_ENV));
        let log_level = log_level_flag
            .unwrap_or_else(|| rollbook_core::default_log_level().to_string());

        Self {
            db_path,
            log_dir,
            log_level,
        }
    }
}
