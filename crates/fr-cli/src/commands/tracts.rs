//! `fr tracts` command: the per-tract demographics sample.
//!
//! Rows carry their positional index so an edit file can reference
//! them the same way the grid widget does.

use crate::cli::{GlobalArgs, TractsArgs};
use crate::commands::common;
use anyhow::{Context, Result};

pub(crate) async fn execute(_args: &TractsArgs, global: &GlobalArgs) -> Result<()> {
    let dashboard = common::open_dashboard(global).await?;
    let rows = dashboard
        .tract_rows()
        .await
        .context("Failed to load the demographics sample")?;

    if global.json {
        return common::print_json(&rows);
    }

    if rows.is_empty() {
        println!("(no demographics rows)");
        return Ok(());
    }

    common::print_table(
        &["#", "DEMO ID", "TRACT", "LOW INCOME", "KIDS", "SENIORS", "SNAP", "NO VEHICLE"],
        &rows
            .iter()
            .enumerate()
            .map(|(idx, r)| {
                vec![
                    idx.to_string(),
                    r.demo_id.to_string(),
                    r.tract_id.to_string(),
                    common::opt_count(r.low_income),
                    common::opt_count(r.kids),
                    common::opt_count(r.seniors),
                    common::opt_count(r.snap),
                    common::opt_count(r.no_vehicle),
                ]
            })
            .collect::<Vec<_>>(),
    );
    println!("\n({} rows)", rows.len());
    Ok(())
}
