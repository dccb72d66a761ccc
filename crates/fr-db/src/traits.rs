//! Database trait definition

use crate::error::DbResult;
use crate::param::SqlParam;
use async_trait::async_trait;
use fr_core::Frame;

/// One UPDATE statement with its bound parameters, ready for a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    /// Statement text with `$n` placeholders
    pub sql: String,
    /// Bound parameter values, in placeholder order
    pub params: Vec<SqlParam>,
}

/// Database abstraction trait for FoodReach
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute a read statement and return the full result set as a frame.
    ///
    /// Values are always bound as parameters, never spliced into the
    /// statement text.
    async fn query(&self, sql: &str, params: &[SqlParam]) -> DbResult<Frame>;

    /// Execute a single data-modifying statement, returns affected rows.
    async fn execute(&self, sql: &str, params: &[SqlParam]) -> DbResult<u64>;

    /// Apply a batch of updates inside one transaction, all-or-nothing.
    ///
    /// A statement that matches zero rows aborts the batch and rolls the
    /// transaction back with [`crate::DbError::UpdateMissedRow`]. Returns
    /// the total number of affected rows on commit.
    async fn apply_updates(&self, statements: &[UpdateStatement]) -> DbResult<u64>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}
