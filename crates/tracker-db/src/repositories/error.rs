//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use tracker_core::error::DomainError;

/// SQLSTATE codes that mean "try again": serialization_failure,
/// deadlock_detected and lock_not_available (lock_timeout)
const TRANSIENT_SQLSTATES: [&str; 3] = ["40001", "40P01", "55P03"];

/// Check whether an error is worth retrying
pub fn is_transient(e: &SqlxError) -> bool {
    match e {
        SqlxError::PoolTimedOut => true,
        SqlxError::Database(db_err) => db_err
            .code()
            .is_some_and(|code| TRANSIENT_SQLSTATES.contains(&code.as_ref())),
        _ => false,
    }
}

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    if is_transient(&e) {
        return DomainError::TransientError(e.to_string());
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Escape LIKE wildcards so user input matches literally
pub fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
