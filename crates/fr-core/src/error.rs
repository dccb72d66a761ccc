//! Error types for fr-core

use thiserror::Error;

/// Core error type for FoodReach
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: Required environment variable is not set
    #[error("[C001] Missing environment variable: {key}")]
    EnvMissing { key: String },

    /// C002: Environment variable holds an unusable value
    #[error("[C002] Invalid value for environment variable {key}: {message}")]
    EnvInvalid { key: String, message: String },

    /// C003: Result set is missing an expected column
    #[error("[C003] Column not found in result set: {column}")]
    ColumnMissing { column: String },

    /// C004: Result cell holds a different type than expected
    #[error("[C004] Unexpected value in column {column}, row {row}: expected {expected}")]
    CellDecode {
        column: String,
        row: usize,
        expected: &'static str,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
