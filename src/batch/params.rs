use rusqlite::Statement;
use rusqlite::types::Value;

use crate::types::{ScalarValue, StatementParams};

/// Convert a single `ScalarValue` to the rusqlite `Value` it binds as.
///
/// Numbers always bind as doubles and text as text; NULL (and anything the
/// wire layer could not recognize as a number or string) binds as NULL.
#[must_use]
pub fn scalar_to_sqlite_value(value: &ScalarValue) -> Value {
    match value {
        ScalarValue::Number(n) => Value::Real(*n),
        ScalarValue::Text(s) => Value::Text(s.clone()),
        ScalarValue::Null => Value::Null,
    }
}

/// Bind every parameter of one entry to its placeholder.
///
/// Positional value `j` binds at placeholder `j + 1`. Named values resolve
/// through [`Statement::parameter_index`]; an unknown name fails with
/// `InvalidParameterName`. Binding stops at the first failure, including
/// more positional values than the statement has placeholders. Values bound
/// before the failure stay bound; the caller discards the statement on error,
/// so partial binds never execute.
///
/// # Errors
///
/// Returns the underlying `rusqlite::Error` for the first value that fails
/// to resolve or bind.
pub fn bind_parameters(
    stmt: &mut Statement<'_>,
    params: &StatementParams,
) -> Result<(), rusqlite::Error> {
    match params {
        StatementParams::Positional(values) => {
            for (j, value) in values.iter().enumerate() {
                stmt.raw_bind_parameter(j + 1, scalar_to_sqlite_value(value))?;
            }
        }
        StatementParams::Named(pairs) => {
            for (name, value) in pairs {
                let index = stmt
                    .parameter_index(name)?
                    .ok_or_else(|| rusqlite::Error::InvalidParameterName(name.clone()))?;
                stmt.raw_bind_parameter(index, scalar_to_sqlite_value(value))?;
            }
        }
    }
    Ok(())
}
