//! Owned SQL parameter values.
//!
//! Callers pass `SqlParam` so neither query code nor tests depend on a
//! driver crate's borrow-based `ToSql` machinery.

use tokio_postgres::types::ToSql;

/// One bound statement parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    /// Integer parameter
    Int(i64),
    /// Floating-point parameter
    Float(f64),
    /// Text parameter
    Text(String),
    /// Boolean parameter
    Bool(bool),
    /// SQL NULL parameter (typed as nullable bigint)
    Null,
}

impl SqlParam {
    /// Borrow as a `tokio-postgres` parameter.
    pub(crate) fn as_pg(&self) -> &(dyn ToSql + Sync) {
        match self {
            SqlParam::Int(v) => v,
            SqlParam::Float(v) => v,
            SqlParam::Text(v) => v,
            SqlParam::Bool(v) => v,
            SqlParam::Null => &Option::<i64>::None,
        }
    }

    /// Stable rendering used in cache keys and error messages.
    pub fn render(&self) -> String {
        match self {
            SqlParam::Int(v) => format!("i:{v}"),
            SqlParam::Float(v) => format!("f:{v}"),
            SqlParam::Text(v) => format!("t:{v}"),
            SqlParam::Bool(v) => format!("b:{v}"),
            SqlParam::Null => "null".to_string(),
        }
    }
}

impl duckdb::ToSql for SqlParam {
    fn to_sql(&self) -> duckdb::Result<duckdb::types::ToSqlOutput<'_>> {
        match self {
            SqlParam::Int(v) => duckdb::ToSql::to_sql(v),
            SqlParam::Float(v) => duckdb::ToSql::to_sql(v),
            SqlParam::Text(v) => duckdb::ToSql::to_sql(v),
            SqlParam::Bool(v) => duckdb::ToSql::to_sql(v),
            SqlParam::Null => Ok(duckdb::types::ToSqlOutput::Owned(
                duckdb::types::Value::Null,
            )),
        }
    }
}

impl From<i64> for SqlParam {
    fn from(v: i64) -> Self {
        SqlParam::Int(v)
    }
}

impl From<&str> for SqlParam {
    fn from(v: &str) -> Self {
        SqlParam::Text(v.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(v: String) -> Self {
        SqlParam::Text(v)
    }
}
