//! Shared helpers for command implementations.

use crate::cli::GlobalArgs;
use anyhow::{Context, Result};
use fr_core::DbSettings;
use fr_db::PgBackend;
use fr_query::Dashboard;
use std::sync::Arc;

/// Read settings from the environment and open the session connection.
pub(crate) async fn open_dashboard(global: &GlobalArgs) -> Result<Arc<Dashboard>> {
    let settings = DbSettings::from_env().context("Database settings are incomplete")?;
    if global.verbose {
        eprintln!(
            "[verbose] Connecting to {}:{}/{}",
            settings.host, settings.port, settings.dbname
        );
    }
    let backend = PgBackend::connect(&settings)
        .await
        .context("Could not connect to the database")?;
    Ok(Arc::new(Dashboard::new(Arc::new(backend))))
}

fn calculate_column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }
    widths
}

/// Print a formatted table to stdout.
///
/// Calculates column widths from `headers` and `rows`, then prints
/// a left-aligned header row, a separator line of dashes, and each
/// data row.  Columns are separated by two spaces.
pub(crate) fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let widths = calculate_column_widths(headers, rows);

    let header_parts: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{:<width$}", h, width = w))
        .collect();
    println!("{}", header_parts.join("  "));

    let sep_parts: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", sep_parts.join("  "));

    for row in rows {
        let row_parts: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<width$}", cell, width = w))
            .collect();
        println!("{}", row_parts.join("  "));
    }
}

/// Serialize to pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("Failed to serialize JSON output")?;
    println!("{output}");
    Ok(())
}

/// Render an optional count, `null` included.
pub(crate) fn opt_count(value: Option<i64>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}

/// Render an optional percentage to one decimal place.
pub(crate) fn opt_pct(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.1}%"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_widths_cover_headers_and_cells() {
        let widths = calculate_column_widths(
            &["ID", "COUNTY"],
            &[vec!["1".to_string(), "Tallapoosa".to_string()]],
        );
        assert_eq!(widths, vec![2, 10]);
    }

    #[test]
    fn test_opt_renderers() {
        assert_eq!(opt_count(Some(42)), "42");
        assert_eq!(opt_count(None), "null");
        assert_eq!(opt_pct(Some(37.5)), "37.5%");
        assert_eq!(opt_pct(None), "n/a");
    }
}
