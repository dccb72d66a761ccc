//! The last-loaded grid snapshot.

use crate::error::{GridError, GridResult};
use chrono::{DateTime, Utc};
use fr_core::{Cell, Frame};

/// A loaded `"Demographics"` frame with its durable identifiers
/// resolved per row.
///
/// Row positions are only meaningful against this exact snapshot; the
/// edit path resolves them to `demo_id` immediately so nothing keyed by
/// position survives past capture.
#[derive(Debug, Clone)]
pub struct GridSnapshot {
    frame: Frame,
    ids: Vec<i64>,
    loaded_at: DateTime<Utc>,
}

impl GridSnapshot {
    /// Wrap a freshly queried frame, resolving the identifier column.
    pub fn from_frame(frame: Frame) -> GridResult<Self> {
        let id_col = frame
            .column_index("demo_id")
            .ok_or_else(|| GridError::BadSnapshot("demo_id column not present".to_string()))?;

        let mut ids = Vec::with_capacity(frame.row_count());
        for (row, cells) in frame.rows.iter().enumerate() {
            match cells.get(id_col) {
                Some(Cell::Int(id)) => ids.push(*id),
                other => {
                    return Err(GridError::BadSnapshot(format!(
                        "row {row} has no integer demo_id (got {other:?})"
                    )))
                }
            }
        }

        Ok(Self {
            frame,
            ids,
            loaded_at: Utc::now(),
        })
    }

    /// The underlying frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Number of rows in the snapshot.
    pub fn row_count(&self) -> usize {
        self.ids.len()
    }

    /// Durable identifier for a row position, if the row exists.
    pub fn demo_id(&self, row: usize) -> Option<i64> {
        self.ids.get(row).copied()
    }

    /// Cell at a row position and named column.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let col = self.frame.column_index(column)?;
        self.frame.get(row, col)
    }

    /// When the snapshot was loaded.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
