//! Synchronous batch SQL execution over `SQLite`.
//!
//! One open [`rusqlite::Connection`] plus an ordered list of statements in,
//! an ordered, index-aligned list of per-statement outcomes out. Prepare,
//! bind, and step failures are captured as data ([`StatementResult::Error`])
//! for their entry only; the batch always runs every entry. The whole call
//! only fails on a malformed wire request, which is a caller contract
//! violation rather than a data-dependent failure.
//!
//! The connection is exclusively owned by the caller for the duration of the
//! call and is never opened, closed, or shared by this crate. Callers running
//! batches from multiple threads must serialize access to the connection
//! themselves.
//!
//! ```rust
//! use sqlite_batch_core::prelude::*;
//!
//! # fn main() -> Result<(), BatchSqlError> {
//! let conn = open_in_memory()?;
//! let results = execute_batch(
//!     &conn,
//!     &[
//!         StatementEntry::new_without_params("CREATE TABLE t(a)"),
//!         StatementEntry::positional("INSERT INTO t VALUES(?)", vec![ScalarValue::Number(1.0)]),
//!         StatementEntry::new_without_params("SELECT * FROM t"),
//!     ],
//! );
//! assert_eq!(results.len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod connection;
pub mod error;
pub mod prelude;
pub mod types;
pub mod wire;

pub use error::BatchSqlError;

pub use batch::execute_batch;
pub use batch::{bind_parameters, scalar_to_sqlite_value};
pub use connection::{open_connection, open_in_memory};
pub use types::{BatchResult, ScalarValue, StatementEntry, StatementParams, StatementResult};
pub use wire::{batch_result_to_json, execute_batch_json, parse_batch_request};

// Callers need rusqlite types (Connection, OpenFlags) to drive the engine.
pub use rusqlite;
