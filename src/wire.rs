//! JSON wire shape for batch requests and results.
//!
//! A request is an ordered array of two-element `[sql, params]` entries,
//! where `params` is either an array of scalars (positional) or an object of
//! scalars (named). Scalars are numbers, strings, or null; anything else
//! coerces to null. The response is an array of result objects, one per
//! entry: `{status: 1, message}` for a failed statement, `{status: 0,
//! columns, rows}` for a statement that produced rows, and `{status: 0,
//! totalChanges, rowsAffected, lastInsertRowId}` for one that did not.
//!
//! A request that does not match this shape aborts the whole call with
//! [`BatchSqlError::MalformedRequest`]; nothing is executed.

use rusqlite::Connection;
use serde_json::{Value, json};

use crate::batch::execute_batch;
use crate::error::BatchSqlError;
use crate::types::{BatchResult, ScalarValue, StatementEntry, StatementParams, StatementResult};

/// Coerce a JSON value into a bindable scalar.
///
/// Numbers and strings pass through; everything else (booleans, arrays,
/// objects, null itself) becomes NULL.
#[must_use]
pub fn scalar_from_json(value: &Value) -> ScalarValue {
    match value {
        Value::Number(n) => n.as_f64().map_or(ScalarValue::Null, ScalarValue::Number),
        Value::String(s) => ScalarValue::Text(s.clone()),
        _ => ScalarValue::Null,
    }
}

/// Parse a JSON batch request into typed statement entries.
///
/// # Errors
///
/// Returns `BatchSqlError::MalformedRequest` if the request is not an array,
/// an entry is not a two-element array, the statement text is not a string,
/// or the parameters are neither an array nor an object.
pub fn parse_batch_request(request: &Value) -> Result<Vec<StatementEntry>, BatchSqlError> {
    let entries = request
        .as_array()
        .ok_or_else(|| malformed("request is not an array".to_string()))?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_entry(index, entry))
        .collect()
}

fn parse_entry(index: usize, entry: &Value) -> Result<StatementEntry, BatchSqlError> {
    let pair = entry
        .as_array()
        .filter(|items| items.len() == 2)
        .ok_or_else(|| malformed(format!("entry {index} is not a [sql, params] pair")))?;

    let sql = pair[0]
        .as_str()
        .ok_or_else(|| malformed(format!("entry {index} statement text is not a string")))?;

    let params = match &pair[1] {
        Value::Array(values) => {
            StatementParams::Positional(values.iter().map(scalar_from_json).collect())
        }
        Value::Object(map) => StatementParams::Named(
            map.iter()
                .map(|(name, value)| (name.clone(), scalar_from_json(value)))
                .collect(),
        ),
        _ => {
            return Err(malformed(format!(
                "entry {index} parameters are neither an array nor an object"
            )));
        }
    };

    Ok(StatementEntry::new(sql, params))
}

/// Serialize batch results into the status-discriminated wire shape.
///
/// `status` 0 marks both success shapes, 1 marks a statement-level error.
/// Non-finite numbers have no JSON representation and serialize as null.
#[must_use]
pub fn batch_result_to_json(results: &BatchResult) -> Value {
    let encoded: Vec<Value> = results
        .iter()
        .map(|result| match result {
            StatementResult::Query(output) => json!({
                "status": 0,
                "columns": output.columns,
                "rows": output.rows,
            }),
            StatementResult::Write(output) => json!({
                "status": 0,
                "totalChanges": output.total_changes,
                "rowsAffected": output.rows_affected,
                "lastInsertRowId": output.last_insert_rowid,
            }),
            StatementResult::Error { message } => json!({
                "status": 1,
                "message": message,
            }),
        })
        .collect();
    Value::Array(encoded)
}

/// Parse a JSON batch request, execute it, and serialize the results.
///
/// # Errors
///
/// Returns `BatchSqlError::MalformedRequest` if the request shape is invalid;
/// in that case nothing is executed. Statement-level failures never abort the
/// call and come back as `{status: 1, message}` entries.
pub fn execute_batch_json(conn: &Connection, request: &Value) -> Result<Value, BatchSqlError> {
    let entries = parse_batch_request(request)?;
    let results = execute_batch(conn, &entries);
    Ok(batch_result_to_json(&results))
}

fn malformed(message: String) -> BatchSqlError {
    BatchSqlError::MalformedRequest(message)
}
