//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Inspect and simulate content list screens.
#[derive(Parser)]
#[command(name = "shelf")]
#[command(about = "Inspect and simulate content list screens")]
#[command(version)]
pub struct Cli {
    /// Path to the JSON settings file
    #[arg(long, env = "SHELF_SETTINGS", global = true)]
    pub settings: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
