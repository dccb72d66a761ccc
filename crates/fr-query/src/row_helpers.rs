//! Shared helpers for reading frame cells into typed row views.

use crate::error::QueryResult;
use fr_core::{Cell, CoreError, Frame};

fn decode_err(frame: &Frame, row: usize, col: usize, expected: &'static str) -> CoreError {
    CoreError::CellDecode {
        column: frame
            .columns
            .get(col)
            .cloned()
            .unwrap_or_else(|| format!("#{col}")),
        row,
        expected,
    }
}

/// Read a non-null text cell.
pub(crate) fn require_str(frame: &Frame, row: usize, col: usize) -> QueryResult<String> {
    match frame.get(row, col) {
        Some(Cell::Text(s)) => Ok(s.clone()),
        _ => Err(decode_err(frame, row, col, "text").into()),
    }
}

/// Read a non-null integer cell.
pub(crate) fn require_i64(frame: &Frame, row: usize, col: usize) -> QueryResult<i64> {
    match frame.get(row, col) {
        Some(Cell::Int(v)) => Ok(*v),
        _ => Err(decode_err(frame, row, col, "integer").into()),
    }
}

/// Read an integer cell that may be NULL.
pub(crate) fn optional_i64(frame: &Frame, row: usize, col: usize) -> QueryResult<Option<i64>> {
    match frame.get(row, col) {
        Some(Cell::Int(v)) => Ok(Some(*v)),
        Some(Cell::Null) => Ok(None),
        _ => Err(decode_err(frame, row, col, "integer or null").into()),
    }
}

/// Read a non-null boolean cell.
pub(crate) fn require_bool(frame: &Frame, row: usize, col: usize) -> QueryResult<bool> {
    match frame.get(row, col) {
        Some(Cell::Bool(b)) => Ok(*b),
        _ => Err(decode_err(frame, row, col, "boolean").into()),
    }
}
