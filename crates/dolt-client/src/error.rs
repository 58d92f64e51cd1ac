//! Error types for the Dolt client

use thiserror::Error;

/// Error type for Dolt client operations
///
/// Transport and statement failures pass through from the connection layer
/// unchanged. Failures the server reports through a nonzero `status` column
/// (nothing to commit, unknown tag, ...) are not errors; the affected
/// operations return `Ok(false)` for those.
#[derive(Error, Debug)]
pub enum DoltError {
    #[error(transparent)]
    Connection(#[from] mysql_async::Error),

    #[error("unexpected result from {procedure}: {detail}")]
    UnexpectedResult {
        procedure: &'static str,
        detail: String,
    },
}

/// Result type alias for Dolt client operations
pub type Result<T> = std::result::Result<T, DoltError>;
