//! Database error types for gympass-db.

use gympass_core::errors::CoreError;
use thiserror::Error;

/// Errors from repository operations, shared by every adapter.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned malformed data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A write would violate a uniqueness or immutability rule.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// ID generation or another core-level failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Catch-all for unexpected errors, e.g. exhausting id attempts.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Columns named by `SQLite` when `idx_check_ins_user_day` rejects an insert.
pub(crate) const CHECK_IN_USER_DAY: &str = "check_ins.user_id, check_ins.check_in_day";
/// Column named by `SQLite` when a check-in id is already taken.
pub(crate) const CHECK_IN_ID: &str = "check_ins.id";

/// Detect a `UNIQUE` constraint violation on exactly `columns`.
///
/// `SQLite` reports these as `UNIQUE constraint failed: <table.col>, ...`, so
/// a violation of the primary key is not mistaken for one on a secondary index.
pub(crate) fn is_unique_violation_on(e: &libsql::Error, columns: &str) -> bool {
    let message = e.to_string();
    message
        .split_once("UNIQUE constraint failed: ")
        .is_some_and(|(_, failed)| {
            failed
                .strip_prefix(columns)
                .is_some_and(|rest| !rest.starts_with(|c: char| c == '_' || c.is_alphanumeric()))
        })
}
