//! `fr states` command: state selector options.

use crate::cli::{GlobalArgs, StatesArgs};
use crate::commands::common;
use anyhow::{Context, Result};

pub(crate) async fn execute(_args: &StatesArgs, global: &GlobalArgs) -> Result<()> {
    let dashboard = common::open_dashboard(global).await?;
    let states = dashboard
        .list_states()
        .await
        .context("Failed to list states")?;

    if global.json {
        return common::print_json(&states);
    }

    if states.is_empty() {
        println!("(no states)");
        return Ok(());
    }
    for name in &states {
        println!("{name}");
    }
    println!("\n({} states)", states.len());
    Ok(())
}
