//! `fr state` command: population totals and urban/rural split.

use crate::cli::{GlobalArgs, StateArgs};
use crate::commands::common;
use anyhow::{Context, Result};

pub(crate) async fn execute(args: &StateArgs, global: &GlobalArgs) -> Result<()> {
    let dashboard = common::open_dashboard(global).await?;

    let population = dashboard
        .state_population(&args.name)
        .await
        .context("Failed to load state population totals")?;
    let split = dashboard
        .state_urban_rural(&args.name)
        .await
        .context("Failed to load the urban/rural split")?;

    if global.json {
        return common::print_json(&serde_json::json!({
            "population": population,
            "urban_rural": split,
        }));
    }

    let Some(population) = population else {
        println!("No census tracts found for state '{}'.", args.name);
        return Ok(());
    };

    println!("{}\n", population.state);
    common::print_table(
        &["TOTAL POPULATION", "LOW ACCESS"],
        &[vec![
            population.total_population.to_string(),
            population.low_access_population.to_string(),
        ]],
    );

    if let Some(split) = split {
        println!("\nUrban vs rural low access:\n");
        common::print_table(
            &["GROUP", "POPULATION", "LOW ACCESS", "SHARE"],
            &[
                vec![
                    "urban".to_string(),
                    split.urban.population.to_string(),
                    split.urban.low_access_population.to_string(),
                    common::opt_pct(split.urban.low_access_pct),
                ],
                vec![
                    "rural".to_string(),
                    split.rural.population.to_string(),
                    split.rural.low_access_population.to_string(),
                    common::opt_pct(split.rural.low_access_pct),
                ],
            ],
        );
    }

    Ok(())
}
