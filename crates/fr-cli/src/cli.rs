//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// FoodReach - dashboard screens over the food-access census database
#[derive(Parser, Debug)]
#[command(name = "fr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the states available in the selector
    States(StatesArgs),

    /// County ranking and low-access breakdown
    Counties(CountiesArgs),

    /// Per-tract demographics sample (the editable grid view)
    Tracts(TractsArgs),

    /// Population totals and urban/rural split for one state
    State(StateArgs),

    /// Apply a grid edit file to the demographics table
    Save(SaveArgs),
}

/// Arguments for the states command
#[derive(Args, Debug)]
pub struct StatesArgs {}

/// Arguments for the counties command
#[derive(Args, Debug)]
pub struct CountiesArgs {
    /// Restrict to one state by name
    #[arg(short, long)]
    pub state: Option<String>,

    /// Number of counties in the no-vehicle ranking
    #[arg(short, long, default_value_t = 10)]
    pub top: usize,
}

/// Arguments for the tracts command
#[derive(Args, Debug)]
pub struct TractsArgs {}

/// Arguments for the state command
#[derive(Args, Debug)]
pub struct StateArgs {
    /// State name, exactly as stored
    pub name: String,
}

/// Arguments for the save command
#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Path to a JSON edit file: {"<row>": {"<column>": value, ...}, ...}
    #[arg(short, long)]
    pub edits: String,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
