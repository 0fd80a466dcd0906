//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types and functions
//! to make it easier to get started with the library.

pub use crate::batch::{bind_parameters, collect_rows, execute_batch, scalar_to_sqlite_value};
pub use crate::connection::{open_connection, open_in_memory};
pub use crate::error::BatchSqlError;
pub use crate::types::{
    BatchResult, QueryOutput, ScalarValue, StatementEntry, StatementParams, StatementResult,
    WriteOutput,
};
pub use crate::wire::{batch_result_to_json, execute_batch_json, parse_batch_request};
