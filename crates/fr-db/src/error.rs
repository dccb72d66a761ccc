//! Error types for fr-db

use thiserror::Error;

/// Database operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Query execution error (D002)
    #[error("[D002] Query failed: {0}")]
    QueryError(String),

    /// Update execution error (D003)
    #[error("[D003] Update failed: {0}")]
    UpdateError(String),

    /// Transaction management error (D004)
    #[error("[D004] Transaction failed: {0}")]
    TransactionError(String),

    /// Row decode error (D005)
    #[error("[D005] Could not read result row: {0}")]
    RowDecode(String),

    /// An update matched no rows, so the batch was rolled back (D006)
    #[error("[D006] Update matched no rows (stale identifier?): {0}")]
    UpdateMissedRow(String),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;
