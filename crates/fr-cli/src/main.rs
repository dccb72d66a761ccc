//! FoodReach CLI - dashboard screens over the food-access census database

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{counties, save, state, states, tracts};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::States(args) => states::execute(args, &cli.global).await,
        cli::Commands::Counties(args) => counties::execute(args, &cli.global).await,
        cli::Commands::Tracts(args) => tracts::execute(args, &cli.global).await,
        cli::Commands::State(args) => state::execute(args, &cli.global).await,
        cli::Commands::Save(args) => save::execute(args, &cli.global).await,
    }
}
