use thiserror::Error;

/// Errors that abort a whole batch call.
///
/// Statement-level failures (prepare, bind, step) never surface here; they
/// are captured per entry as [`crate::types::StatementResult::Error`] and the
/// batch keeps going. This enum is reserved for contract violations and
/// connection-level problems.
#[derive(Debug, Error)]
pub enum BatchSqlError {
    #[error(transparent)]
    SqliteError(#[from] rusqlite::Error),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Malformed batch request: {0}")]
    MalformedRequest(String),
}
