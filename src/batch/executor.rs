use rusqlite::Connection;
use tracing::debug;

use crate::types::{BatchResult, StatementEntry, StatementResult, WriteOutput};

use super::params::bind_parameters;
use super::query::collect_rows;

/// Execute a batch of statements sequentially on one connection.
///
/// The result is index-aligned with `entries` and always the same length.
/// A failing statement (prepare, bind, or step) is captured as
/// [`StatementResult::Error`] for its entry only; later entries still run.
/// At most one statement is live on the connection at any instant, and it is
/// finalized (dropped) before the next entry is prepared.
#[must_use]
pub fn execute_batch(conn: &Connection, entries: &[StatementEntry]) -> BatchResult {
    let mut results = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        debug!(index, sql = entry.sql.as_str(), "executing batch entry");
        results.push(run_entry(conn, entry));
    }
    results
}

fn run_entry(conn: &Connection, entry: &StatementEntry) -> StatementResult {
    let before = conn.total_changes();

    // The statement is finalized when `stmt` drops, on every exit path.
    let mut stmt = match conn.prepare(&entry.sql) {
        Ok(stmt) => stmt,
        Err(e) => {
            return StatementResult::Error {
                message: e.to_string(),
            };
        }
    };

    if let Err(e) = bind_parameters(&mut stmt, &entry.params) {
        return StatementResult::Error {
            message: e.to_string(),
        };
    }

    // Column metadata must be captured before raw_query takes the statement.
    let columns: Vec<String> = stmt
        .column_names()
        .iter()
        .map(std::string::ToString::to_string)
        .collect();

    let mut rows = stmt.raw_query();
    match collect_rows(&mut rows, columns) {
        Ok(Some(query)) => StatementResult::Query(query),
        Ok(None) => {
            let after = conn.total_changes();
            StatementResult::Write(WriteOutput {
                total_changes: after as i64,
                rows_affected: after.saturating_sub(before) as i64,
                last_insert_rowid: conn.last_insert_rowid(),
            })
        }
        Err(e) => StatementResult::Error {
            message: e.to_string(),
        },
    }
}
