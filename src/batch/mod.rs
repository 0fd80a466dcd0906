// Batch execution module - the prepare/bind/step/collect pipeline
//
// This module is split into several sub-modules for better organization:
// - params: parameter coercion and binding
// - query: column value coercion and row collection
// - executor: per-entry orchestration across a whole batch

pub mod executor;
pub mod params;
pub mod query;

// Re-export the public API
pub use executor::execute_batch;
pub use params::{bind_parameters, scalar_to_sqlite_value};
pub use query::collect_rows;
