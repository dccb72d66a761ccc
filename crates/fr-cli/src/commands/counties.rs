//! `fr counties` command: no-vehicle ranking and low-access breakdown.

use crate::cli::{CountiesArgs, GlobalArgs};
use crate::commands::common;
use anyhow::{Context, Result};

pub(crate) async fn execute(args: &CountiesArgs, global: &GlobalArgs) -> Result<()> {
    let dashboard = common::open_dashboard(global).await?;
    let state = args.state.as_deref();

    let ranked = dashboard
        .top_counties_no_vehicle(args.top as i64, state)
        .await
        .context("Failed to load the no-vehicle ranking")?;
    let breakdown = dashboard
        .county_low_access_breakdown(state)
        .await
        .context("Failed to load the county breakdown")?;

    if global.json {
        return common::print_json(&serde_json::json!({
            "top_no_vehicle": ranked,
            "low_access_breakdown": breakdown,
        }));
    }

    if ranked.is_empty() && breakdown.is_empty() {
        println!("(no counties matched)");
        return Ok(());
    }

    println!("Households without vehicle access (top {}):\n", args.top);
    common::print_table(
        &["COUNTY", "STATE", "HOUSEHOLDS"],
        &ranked
            .iter()
            .map(|r| {
                vec![
                    r.county.clone(),
                    r.state.clone(),
                    r.households_no_vehicle.to_string(),
                ]
            })
            .collect::<Vec<_>>(),
    );

    println!("\nLow-access population by county:\n");
    common::print_table(
        &["COUNTY", "STATE", "LOW ACCESS", "LOW INCOME", "KIDS", "SENIORS", "SNAP"],
        &breakdown
            .iter()
            .map(|r| {
                vec![
                    r.county.clone(),
                    r.state.clone(),
                    r.low_access_pop.to_string(),
                    r.low_income.to_string(),
                    r.kids.to_string(),
                    r.seniors.to_string(),
                    r.snap_households.to_string(),
                ]
            })
            .collect::<Vec<_>>(),
    );

    Ok(())
}
