//! Command-line interface layer.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Browse Mars real estate listings from the terminal.
#[derive(Parser, Debug)]
#[command(name = "marsgaze", version, about)]
pub struct Cli {
    /// Emit machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a configuration file (defaults to .marsgaze/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List property listings for a filter
    List(commands::properties::ListArgs),
    /// Show the detail of a single listing
    Show(commands::properties::ShowArgs),
}
