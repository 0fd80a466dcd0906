//! Connection open helpers.
//!
//! The batch engine never opens, closes, or shares connections; the caller
//! owns the connection across the whole batch call. These helpers are the
//! thin glue for callers that do not already hold a [`Connection`].

use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::error::BatchSqlError;

/// Open a database connection with explicit flags.
///
/// The returned connection is not internally synchronized; callers running
/// batches from multiple threads must serialize access to it themselves.
///
/// # Errors
///
/// Returns `BatchSqlError::SqliteError` if the database cannot be opened.
pub fn open_connection(path: &str, flags: OpenFlags) -> Result<Connection, BatchSqlError> {
    debug!(path, "opening sqlite connection");
    Ok(Connection::open_with_flags(path, flags)?)
}

/// Open a private in-memory database.
///
/// # Errors
///
/// Returns `BatchSqlError::SqliteError` if the database cannot be created.
pub fn open_in_memory() -> Result<Connection, BatchSqlError> {
    Ok(Connection::open_in_memory()?)
}
