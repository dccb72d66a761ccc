//! The pending edit set and its translation to UPDATE statements.

use crate::error::{GridError, GridResult};
use crate::snapshot::GridSnapshot;
use fr_core::Cell;
use fr_db::{SqlParam, UpdateStatement};
use std::collections::BTreeMap;

/// Indicator columns the grid may write back.
pub const EDITABLE_COLUMNS: &[&str] = &[
    "TractLOWI",
    "TractKids",
    "TractSeniors",
    "TractSNAP",
    "TractHUNV",
];

/// True if the column belongs to the editable set.
pub fn is_editable(column: &str) -> bool {
    EDITABLE_COLUMNS.contains(&column)
}

/// Sparse pending edits, keyed by durable identifier.
///
/// The grid widget reports edits by row position; [`EditSet::record`]
/// resolves the position against the snapshot once and stores the cell
/// under its `demo_id`. Re-recording a cell keeps the latest value, and
/// recording the value the snapshot already holds drops the pending
/// edit instead of writing a no-op.
#[derive(Debug, Default)]
pub struct EditSet {
    cells: BTreeMap<i64, BTreeMap<String, Cell>>,
}

impl EditSet {
    /// Empty edit set.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no edits are pending.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of rows with pending edits.
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of pending cell edits.
    pub fn cell_count(&self) -> usize {
        self.cells.values().map(|row| row.len()).sum()
    }

    /// Drop every pending edit.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Capture one cell edit against the snapshot.
    pub fn record(
        &mut self,
        snapshot: &GridSnapshot,
        row_index: usize,
        column: &str,
        value: Cell,
    ) -> GridResult<()> {
        if !is_editable(column) {
            return Err(GridError::ColumnNotEditable {
                column: column.to_string(),
            });
        }
        let demo_id = snapshot
            .demo_id(row_index)
            .ok_or_else(|| GridError::RowOutOfRange {
                index: row_index,
                rows: snapshot.row_count(),
            })?;
        if !matches!(value, Cell::Int(_) | Cell::Null) {
            return Err(GridError::ValueType {
                column: column.to_string(),
                got: value.to_string(),
            });
        }

        if snapshot.cell(row_index, column) == Some(&value) {
            // Edited back to the loaded value: nothing to save.
            if let Some(row) = self.cells.get_mut(&demo_id) {
                row.remove(column);
                if row.is_empty() {
                    self.cells.remove(&demo_id);
                }
            }
            return Ok(());
        }

        self.cells
            .entry(demo_id)
            .or_default()
            .insert(column.to_string(), value);
        Ok(())
    }

    /// One UPDATE per edited row, containing exactly the changed
    /// columns and keyed by `demo_id`. Rows and columns are emitted in
    /// ascending order so a save plan is deterministic.
    pub fn to_statements(&self) -> Vec<UpdateStatement> {
        self.cells
            .iter()
            .map(|(demo_id, row)| {
                let mut assignments = Vec::with_capacity(row.len());
                let mut params = Vec::with_capacity(row.len() + 1);
                for (idx, (column, value)) in row.iter().enumerate() {
                    assignments.push(format!("\"{column}\" = ${}", idx + 1));
                    params.push(match value {
                        Cell::Int(v) => SqlParam::Int(*v),
                        _ => SqlParam::Null,
                    });
                }
                params.push(SqlParam::Int(*demo_id));
                UpdateStatement {
                    sql: format!(
                        "UPDATE \"Demographics\" SET {} WHERE demo_id = ${}",
                        assignments.join(", "),
                        params.len()
                    ),
                    params,
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "edits_test.rs"]
mod tests;
