//! Error types for fr-grid

use thiserror::Error;

/// Edit reconciliation errors
#[derive(Error, Debug)]
pub enum GridError {
    /// G001: The column is not part of the editable set
    #[error("[G001] Column is not editable: {column}")]
    ColumnNotEditable { column: String },

    /// G002: The row index does not exist in the loaded snapshot
    #[error("[G002] Row {index} is outside the loaded snapshot ({rows} rows)")]
    RowOutOfRange { index: usize, rows: usize },

    /// G003: The value does not fit the column
    #[error("[G003] Column {column} takes an integer count or null, got {got}")]
    ValueType { column: String, got: String },

    /// G004: The snapshot could not be loaded or reloaded
    #[error("[G004] Snapshot load failed: {0}")]
    Load(#[from] fr_query::QueryError),

    /// G005: The save transaction failed; pending edits are retained
    #[error("[G005] Save failed: {0}")]
    Save(#[from] fr_db::DbError),

    /// G006: The snapshot frame lacks a usable identifier column
    #[error("[G006] Snapshot is missing its identifier column: {0}")]
    BadSnapshot(String),
}

/// Result type alias for GridError
pub type GridResult<T> = Result<T, GridError>;
