//! Tabular result snapshots.
//!
//! A [`Frame`] is the flat, named-column shape every dashboard query
//! produces and every renderer consumes. Cells are plain Rust values so
//! callers never depend on a database driver crate.

use crate::error::{CoreError, CoreResult};
use std::fmt;

/// One value in a result set.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// SQL NULL
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value (all integer widths collapse to i64)
    Int(i64),
    /// Floating-point value
    Float(f64),
    /// Text value
    Text(String),
}

impl Cell {
    /// True if the cell is SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Integer view of the cell.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Float view of the cell; integers widen.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Float(v) => Some(*v),
            Cell::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Text view of the cell.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Boolean view of the cell.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Cell::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Convert a JSON value to a cell.
    ///
    /// Whole numbers become `Int`, other numbers `Float`. Arrays and
    /// objects have no cell representation and return `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Cell> {
        match value {
            serde_json::Value::Null => Some(Cell::Null),
            serde_json::Value::Bool(b) => Some(Cell::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Cell::Int(i))
                } else {
                    n.as_f64().map(Cell::Float)
                }
            }
            serde_json::Value::String(s) => Some(Cell::Text(s.clone())),
            _ => None,
        }
    }

    /// Convert the cell to a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Cell::Null => serde_json::Value::Null,
            Cell::Bool(b) => serde_json::Value::Bool(*b),
            Cell::Int(v) => serde_json::Value::from(*v),
            Cell::Float(v) => {
                serde_json::Number::from_f64(*v).map_or(serde_json::Value::Null, serde_json::Value::Number)
            }
            Cell::Text(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => write!(f, "null"),
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::Int(v) => write!(f, "{v}"),
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A tabular snapshot: named columns and rows of cells.
///
/// Column names keep the exact case the database returned; lookups are
/// case-sensitive to match the quoted identifiers in the schema.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    /// Column names from the result set.
    pub columns: Vec<String>,
    /// Rows of cells, one `Vec<Cell>` per row.
    pub rows: Vec<Vec<Cell>>,
}

impl Frame {
    /// Build a frame from columns and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { columns, rows }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True if the frame has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Position of a column by exact name, or a typed error.
    pub fn require_column(&self, name: &str) -> CoreResult<usize> {
        self.column_index(name).ok_or_else(|| CoreError::ColumnMissing {
            column: name.to_string(),
        })
    }

    /// Cell at `(row, column)` if both exist.
    pub fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Render every row as display strings, for table output.
    pub fn to_string_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    /// Render the frame as an array of JSON objects keyed by column name.
    pub fn to_json_rows(&self) -> Vec<serde_json::Value> {
        self.rows
            .iter()
            .map(|row| {
                let map: serde_json::Map<String, serde_json::Value> = self
                    .columns
                    .iter()
                    .zip(row.iter())
                    .map(|(col, cell)| (col.clone(), cell.to_json()))
                    .collect();
                serde_json::Value::Object(map)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "frame_test.rs"]
mod tests;
