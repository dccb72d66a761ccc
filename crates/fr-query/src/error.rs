//! Error types for fr-query

use thiserror::Error;

/// Query layer errors
#[derive(Error, Debug)]
pub enum QueryError {
    /// Q001: The database rejected or failed the statement
    #[error("[Q001] Dashboard query failed: {0}")]
    Db(#[from] fr_db::DbError),

    /// Q002: The result set did not match the expected shape
    #[error("[Q002] Result decode failed: {0}")]
    Decode(#[from] fr_core::CoreError),
}

/// Result type alias for QueryError
pub type QueryResult<T> = Result<T, QueryError>;
