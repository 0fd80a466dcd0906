use rusqlite::Rows;
use rusqlite::types::ValueRef;

use crate::types::{QueryOutput, ScalarValue};

/// Extract one column of the current row as a `ScalarValue`.
///
/// Integer and float columns surface as numbers, NULL as NULL, and everything
/// else (text, blobs) as text. Binary data coming back as lossy UTF-8 text is
/// a deliberate carry-over from the wire protocol this crate implements, not
/// an oversight.
fn column_value(row: &rusqlite::Row<'_>, idx: usize) -> Result<ScalarValue, rusqlite::Error> {
    let value = match row.get_ref(idx)? {
        ValueRef::Integer(i) => ScalarValue::Number(i as f64),
        ValueRef::Real(f) => ScalarValue::Number(f),
        ValueRef::Null => ScalarValue::Null,
        ValueRef::Text(t) => ScalarValue::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => ScalarValue::Text(String::from_utf8_lossy(b).into_owned()),
    };
    Ok(value)
}

/// Drain a stepping statement into a `QueryOutput`.
///
/// Returns `Some` when the statement yielded at least one row and `None` when
/// it completed without ever yielding one (the write path; this includes
/// SELECTs with an empty result set). A step error anywhere in the loop
/// discards the rows collected so far.
///
/// # Errors
///
/// Returns the underlying `rusqlite::Error` if a step or column read fails.
pub fn collect_rows(
    rows: &mut Rows<'_>,
    columns: Vec<String>,
) -> Result<Option<QueryOutput>, rusqlite::Error> {
    let column_count = columns.len();
    let mut collected: Vec<Vec<ScalarValue>> = Vec::new();

    while let Some(row) = rows.next()? {
        let mut values = Vec::with_capacity(column_count);
        for idx in 0..column_count {
            values.push(column_value(row, idx)?);
        }
        collected.push(values);
    }

    if collected.is_empty() {
        Ok(None)
    } else {
        Ok(Some(QueryOutput {
            columns,
            rows: collected,
        }))
    }
}
