//! Postgres database backend implementation

use crate::error::{DbError, DbResult};
use crate::param::SqlParam;
use crate::traits::{Database, UpdateStatement};
use async_trait::async_trait;
use fr_core::{Cell, DbSettings, Frame};
use tokio::sync::Mutex;
use tokio_postgres::types::{ToSql, Type};
use tokio_postgres::{Client, Config, NoTls, Row};

/// Postgres database backend.
///
/// Owns a single client for the whole session; statements are serialized
/// through it, matching the one-connection-per-session resource model.
pub struct PgBackend {
    client: Mutex<Client>,
}

impl PgBackend {
    /// Connect using the given settings.
    ///
    /// The connection task is spawned in the background; if the link
    /// drops, its terminal error is logged and every later call fails.
    /// `statement_timeout` is applied to the session so no query can
    /// block a screen load indefinitely.
    pub async fn connect(settings: &DbSettings) -> DbResult<Self> {
        let timeout = format!("-c statement_timeout={}s", settings.statement_timeout_secs);
        let (client, connection) = Config::new()
            .host(&settings.host)
            .port(settings.port)
            .user(&settings.user)
            .password(&settings.password)
            .dbname(&settings.dbname)
            .options(&timeout)
            .connect(NoTls)
            .await
            .map_err(|e| DbError::ConnectionError(e.to_string()))?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                log::warn!("database connection closed: {e}");
            }
        });

        Ok(Self {
            client: Mutex::new(client),
        })
    }
}

#[async_trait]
impl Database for PgBackend {
    async fn query(&self, sql: &str, params: &[SqlParam]) -> DbResult<Frame> {
        let client = self.client.lock().await;
        let stmt = client
            .prepare(sql)
            .await
            .map_err(|e| DbError::QueryError(format!("{e}: {sql}")))?;

        let columns: Vec<String> = stmt.columns().iter().map(|c| c.name().to_string()).collect();

        let refs: Vec<&(dyn ToSql + Sync)> = params.iter().map(|p| p.as_pg()).collect();
        let pg_rows = client
            .query(&stmt, &refs)
            .await
            .map_err(|e| DbError::QueryError(format!("{e}: {sql}")))?;

        let mut rows = Vec::with_capacity(pg_rows.len());
        for row in &pg_rows {
            rows.push(frame_row(row)?);
        }

        Ok(Frame::new(columns, rows))
    }

    async fn execute(&self, sql: &str, params: &[SqlParam]) -> DbResult<u64> {
        let client = self.client.lock().await;
        let refs: Vec<&(dyn ToSql + Sync)> = params.iter().map(|p| p.as_pg()).collect();
        client
            .execute(sql, &refs)
            .await
            .map_err(|e| DbError::UpdateError(format!("{e}: {sql}")))
    }

    async fn apply_updates(&self, statements: &[UpdateStatement]) -> DbResult<u64> {
        let mut client = self.client.lock().await;
        let tx = client
            .transaction()
            .await
            .map_err(|e| DbError::TransactionError(format!("BEGIN failed: {e}")))?;

        let mut affected = 0u64;
        for statement in statements {
            let refs: Vec<&(dyn ToSql + Sync)> =
                statement.params.iter().map(|p| p.as_pg()).collect();
            let n = tx
                .execute(statement.sql.as_str(), &refs)
                .await
                .map_err(|e| DbError::UpdateError(format!("{e}: {}", statement.sql)))?;
            if n == 0 {
                // Dropping the transaction rolls it back.
                return Err(DbError::UpdateMissedRow(statement.sql.clone()));
            }
            affected += n;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionError(format!("COMMIT failed: {e}")))?;
        Ok(affected)
    }

    fn db_type(&self) -> &'static str {
        "postgres"
    }
}

/// Convert one Postgres row to frame cells, by declared column type.
fn frame_row(row: &Row) -> DbResult<Vec<Cell>> {
    let mut cells = Vec::with_capacity(row.columns().len());
    for (idx, column) in row.columns().iter().enumerate() {
        cells.push(read_cell(row, idx, column.type_()).map_err(|e| {
            DbError::RowDecode(format!("column {} ({}): {e}", column.name(), column.type_()))
        })?);
    }
    Ok(cells)
}

fn read_cell(row: &Row, idx: usize, ty: &Type) -> Result<Cell, tokio_postgres::Error> {
    let cell = if *ty == Type::BOOL {
        row.try_get::<_, Option<bool>>(idx)?.map_or(Cell::Null, Cell::Bool)
    } else if *ty == Type::INT2 {
        row.try_get::<_, Option<i16>>(idx)?
            .map_or(Cell::Null, |v| Cell::Int(v as i64))
    } else if *ty == Type::INT4 {
        row.try_get::<_, Option<i32>>(idx)?
            .map_or(Cell::Null, |v| Cell::Int(v as i64))
    } else if *ty == Type::INT8 {
        row.try_get::<_, Option<i64>>(idx)?.map_or(Cell::Null, Cell::Int)
    } else if *ty == Type::FLOAT4 {
        row.try_get::<_, Option<f32>>(idx)?
            .map_or(Cell::Null, |v| Cell::Float(v as f64))
    } else if *ty == Type::FLOAT8 {
        row.try_get::<_, Option<f64>>(idx)?.map_or(Cell::Null, Cell::Float)
    } else if *ty == Type::TEXT || *ty == Type::VARCHAR || *ty == Type::BPCHAR {
        row.try_get::<_, Option<String>>(idx)?.map_or(Cell::Null, Cell::Text)
    } else {
        log::debug!("unhandled column type {ty}, reading as text");
        row.try_get::<_, Option<String>>(idx)?.map_or(Cell::Null, Cell::Text)
    };
    Ok(cell)
}
