use serde::{Serialize, Serializer};

/// A scalar value bound into or read out of a statement.
///
/// Every parameter and every column collapses into this three-way shape:
/// numbers (always 64-bit doubles), text, or NULL. Anything a caller supplies
/// that is not recognizably a number or a string binds as NULL.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// Numeric value (64-bit double)
    Number(f64),
    /// Text/string value
    Text(String),
    /// NULL value
    Null,
}

impl ScalarValue {
    /// Check if this value is NULL
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        if let ScalarValue::Number(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let ScalarValue::Text(value) = self {
            Some(value)
        } else {
            None
        }
    }
}

impl Serialize for ScalarValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ScalarValue::Number(n) => serializer.serialize_f64(*n),
            ScalarValue::Text(s) => serializer.serialize_str(s),
            ScalarValue::Null => serializer.serialize_unit(),
        }
    }
}

/// Parameters for one statement entry.
///
/// The binding strategy is decided once per entry: positional value `j`
/// binds at placeholder `j + 1`, named values resolve through the
/// statement's parameter names (keys carry their `:`/`@`/`$` prefix as
/// written in the SQL).
#[derive(Debug, Clone, PartialEq)]
pub enum StatementParams {
    /// Ordered values for `?`/`?N` placeholders
    Positional(Vec<ScalarValue>),
    /// Name/value pairs for `:name`-style placeholders, bound in order
    Named(Vec<(String, ScalarValue)>),
}

impl Default for StatementParams {
    fn default() -> Self {
        StatementParams::Positional(Vec::new())
    }
}

/// A SQL statement and its parameters bundled together
///
/// This type makes it easier to pass around a SQL statement and its
/// parameters as a single unit within a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementEntry {
    /// The SQL statement text
    pub sql: String,
    /// The parameters to be bound to the statement
    pub params: StatementParams,
}

impl StatementEntry {
    /// Create a new entry with the given statement text and parameters
    pub fn new(sql: impl Into<String>, params: StatementParams) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// Create a new entry with positional parameters
    pub fn positional(sql: impl Into<String>, params: Vec<ScalarValue>) -> Self {
        Self::new(sql, StatementParams::Positional(params))
    }

    /// Create a new entry with named parameters
    pub fn named(sql: impl Into<String>, params: Vec<(String, ScalarValue)>) -> Self {
        Self::new(sql, StatementParams::Named(params))
    }

    /// Create a new entry with no parameters
    pub fn new_without_params(sql: impl Into<String>) -> Self {
        Self::new(sql, StatementParams::default())
    }
}

/// Column names and rows produced by a statement that returned rows.
///
/// Every row has exactly `columns.len()` values, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutput {
    /// Column names, in statement order
    pub columns: Vec<String>,
    /// The collected rows
    pub rows: Vec<Vec<ScalarValue>>,
}

/// Write statistics for a statement that completed without producing rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutput {
    /// The connection's cumulative change counter after this statement
    pub total_changes: i64,
    /// Rows modified by this statement alone
    pub rows_affected: i64,
    /// Rowid of the most recent successful INSERT on the connection
    pub last_insert_rowid: i64,
}

/// Outcome of one statement in a batch.
///
/// A statement that completes without ever yielding a row reports the
/// [`Write`](Self::Write) shape, including SELECTs with an empty result set
/// (`rows_affected` is simply 0 in that case).
#[derive(Debug, Clone, PartialEq)]
pub enum StatementResult {
    /// The statement produced at least one row
    Query(QueryOutput),
    /// The statement completed without producing rows
    Write(WriteOutput),
    /// The statement failed to prepare, bind, or step
    Error {
        /// Human-readable engine error message
        message: String,
    },
}

impl StatementResult {
    #[must_use]
    pub fn as_query(&self) -> Option<&QueryOutput> {
        if let StatementResult::Query(output) = self {
            Some(output)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_write(&self) -> Option<&WriteOutput> {
        if let StatementResult::Write(output) = self {
            Some(output)
        } else {
            None
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        if let StatementResult::Error { message } = self {
            Some(message)
        } else {
            None
        }
    }
}

/// Ordered results of a batch call, index-aligned with the request.
pub type BatchResult = Vec<StatementResult>;
