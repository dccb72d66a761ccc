//! DuckDB database backend implementation
//!
//! Embedded backend used by tests and local fixtures; speaks the same
//! `$n`-placeholder SQL as the Postgres backend.

use crate::error::{DbError, DbResult};
use crate::param::SqlParam;
use crate::traits::{Database, UpdateStatement};
use async_trait::async_trait;
use duckdb::Connection;
use fr_core::{Cell, Frame};
use std::sync::Mutex;

/// DuckDB database backend
pub struct DuckDbBackend {
    conn: Mutex<Connection>,
}

impl DuckDbBackend {
    /// Create a new in-memory DuckDB connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute multiple semicolon-separated statements, for fixtures.
    pub fn execute_batch(&self, sql: &str) -> DbResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(sql)
            .map_err(|e| DbError::UpdateError(e.to_string()))
    }

    fn query_sync(&self, sql: &str, params: &[SqlParam]) -> DbResult<Frame> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| DbError::QueryError(format!("{e}: {sql}")))?;

        let refs: Vec<&dyn duckdb::ToSql> =
            params.iter().map(|p| p as &dyn duckdb::ToSql).collect();

        // DuckDB panics on `stmt.column_count()` before execution, so we
        // collect all rows via `query_map` first, then read column metadata.
        let rows: Vec<Vec<Cell>> = stmt
            .query_map(&refs[..], |row| {
                let col_count = row.as_ref().column_count();
                Ok((0..col_count).map(|i| read_cell(row, i)).collect())
            })
            .map_err(|e| DbError::QueryError(format!("{e}: {sql}")))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DbError::RowDecode(e.to_string()))?;

        let column_count = stmt.column_count();
        let columns: Vec<String> = (0..column_count)
            .map(|i| {
                stmt.column_name(i)
                    .map_or("?".to_string(), |v| v.to_string())
            })
            .collect();

        Ok(Frame::new(columns, rows))
    }

    fn execute_sync(&self, sql: &str, params: &[SqlParam]) -> DbResult<u64> {
        let conn = self.conn.lock().unwrap();
        let refs: Vec<&dyn duckdb::ToSql> =
            params.iter().map(|p| p as &dyn duckdb::ToSql).collect();
        let n = conn
            .execute(sql, &refs[..])
            .map_err(|e| DbError::UpdateError(format!("{e}: {sql}")))?;
        Ok(n as u64)
    }

    fn apply_updates_sync(&self, statements: &[UpdateStatement]) -> DbResult<u64> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch("BEGIN TRANSACTION")
            .map_err(|e| DbError::TransactionError(format!("BEGIN failed: {e}")))?;

        let mut affected = 0u64;
        for statement in statements {
            let refs: Vec<&dyn duckdb::ToSql> = statement
                .params
                .iter()
                .map(|p| p as &dyn duckdb::ToSql)
                .collect();
            let result = conn.execute(&statement.sql, &refs[..]);
            match result {
                Ok(0) => {
                    let _ = conn.execute_batch("ROLLBACK");
                    return Err(DbError::UpdateMissedRow(statement.sql.clone()));
                }
                Ok(n) => affected += n as u64,
                Err(e) => {
                    let _ = conn.execute_batch("ROLLBACK");
                    return Err(DbError::UpdateError(format!("{e}: {}", statement.sql)));
                }
            }
        }

        conn.execute_batch("COMMIT")
            .map_err(|e| DbError::TransactionError(format!("COMMIT failed: {e}")))?;
        Ok(affected)
    }
}

#[async_trait]
impl Database for DuckDbBackend {
    async fn query(&self, sql: &str, params: &[SqlParam]) -> DbResult<Frame> {
        self.query_sync(sql, params)
    }

    async fn execute(&self, sql: &str, params: &[SqlParam]) -> DbResult<u64> {
        self.execute_sync(sql, params)
    }

    async fn apply_updates(&self, statements: &[UpdateStatement]) -> DbResult<u64> {
        self.apply_updates_sync(statements)
    }

    fn db_type(&self) -> &'static str {
        "duckdb"
    }
}

/// Read a column value as a cell, trying multiple DuckDB types.
///
/// DuckDB integer columns return `None` for `Option<String>`, so we try
/// String -> i64 -> f64 -> bool and fall through to NULL. Aggregates are
/// cast to BIGINT in the statements, so sums stay within i64.
fn read_cell(row: &duckdb::Row<'_>, idx: usize) -> Cell {
    if let Ok(Some(s)) = row.get::<_, Option<String>>(idx) {
        return Cell::Text(s);
    }
    if let Ok(Some(n)) = row.get::<_, Option<i64>>(idx) {
        return Cell::Int(n);
    }
    if let Ok(Some(f)) = row.get::<_, Option<f64>>(idx) {
        return Cell::Float(f);
    }
    if let Ok(Some(b)) = row.get::<_, Option<bool>>(idx) {
        return Cell::Bool(b);
    }
    Cell::Null
}
