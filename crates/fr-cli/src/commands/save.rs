//! `fr save` command: apply a grid edit file.
//!
//! The edit file mirrors what the grid widget emits: row positions
//! mapped to changed cells, `{"3": {"TractKids": 42}}`. Positions are
//! resolved to durable identifiers the moment each edit is captured.

use crate::cli::{GlobalArgs, SaveArgs};
use crate::commands::common;
use anyhow::{anyhow, Context, Result};
use fr_core::Cell;
use fr_grid::GridSession;
use std::collections::BTreeMap;

pub(crate) async fn execute(args: &SaveArgs, global: &GlobalArgs) -> Result<()> {
    let edits = load_edit_file(&args.edits)?;
    if edits.is_empty() {
        println!("Edit file contains no edits; nothing to save.");
        return Ok(());
    }

    let dashboard = common::open_dashboard(global).await?;
    let mut session = GridSession::load(dashboard)
        .await
        .context("Failed to load the demographics snapshot")?;
    if global.verbose {
        eprintln!(
            "[verbose] Snapshot: {} rows loaded at {}",
            session.snapshot().row_count(),
            session.snapshot().loaded_at().to_rfc3339()
        );
    }

    for (row, column, value) in edits {
        session
            .record_edit(row, &column, value)
            .with_context(|| format!("Cannot edit row {row}, column {column}"))?;
    }

    if global.verbose {
        eprintln!("[verbose] {} pending cell edits", session.pending_cells());
    }

    let outcome = session
        .save()
        .await
        .context("Save failed; no changes were applied")?;

    if outcome.rows_updated == 0 {
        println!("No changes to save.");
    } else {
        println!(
            "Saved {} rows ({} cells).",
            outcome.rows_updated, outcome.cells_applied
        );
    }
    Ok(())
}

/// Read and validate an edit file into `(row, column, value)` triples.
fn load_edit_file(path: &str) -> Result<Vec<(usize, String, Cell)>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read edit file {path}"))?;
    parse_edit_file(&text)
}

fn parse_edit_file(text: &str) -> Result<Vec<(usize, String, Cell)>> {
    let parsed: BTreeMap<String, BTreeMap<String, serde_json::Value>> =
        serde_json::from_str(text).context("Edit file is not valid JSON")?;

    let mut edits = Vec::new();
    for (row_key, cells) in parsed {
        let row: usize = row_key
            .parse()
            .map_err(|_| anyhow!("Edit file key {row_key:?} is not a row index"))?;
        for (column, value) in cells {
            let cell = Cell::from_json(&value)
                .ok_or_else(|| anyhow!("Unsupported value for {column}: {value}"))?;
            edits.push((row, column, cell));
        }
    }
    Ok(edits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_edit_file() {
        let edits = parse_edit_file(r#"{"3": {"TractKids": 42, "TractSNAP": null}}"#).unwrap();
        assert_eq!(
            edits,
            vec![
                (3, "TractKids".to_string(), Cell::Int(42)),
                (3, "TractSNAP".to_string(), Cell::Null),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_non_index_keys() {
        let err = parse_edit_file(r#"{"three": {"TractKids": 42}}"#).unwrap_err();
        assert!(err.to_string().contains("three"), "got: {err}");
    }

    #[test]
    fn test_parse_rejects_nested_values() {
        let err = parse_edit_file(r#"{"0": {"TractKids": [1, 2]}}"#).unwrap_err();
        assert!(err.to_string().contains("TractKids"), "got: {err}");
    }

    #[test]
    fn test_load_edit_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"0": {{"TractLOWI": 7}}}}"#).unwrap();

        let edits = load_edit_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(edits, vec![(0, "TractLOWI".to_string(), Cell::Int(7))]);
    }

    #[test]
    fn test_missing_file_is_an_error_not_a_panic() {
        let err = load_edit_file("/nonexistent/edits.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read edit file"));
    }
}
