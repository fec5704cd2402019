//! Command-line interface for toetictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use toetictac_rules::Variant;

/// Toetictac - classic and mutation three-in-a-row in the terminal
#[derive(Parser, Debug)]
#[command(name = "toetictac")]
#[command(about = "Two-player three-in-a-row with a mutation variant", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (falls back to TOETICTAC_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal, two players sharing one keyboard
    Play {
        /// Variant of the first game (classic or mutation)
        #[arg(long)]
        variant: Option<Variant>,

        /// How long a redrawn cell stays busy, in milliseconds
        #[arg(long)]
        cooldown_ms: Option<u64>,

        /// Do not mark highlighted cells
        #[arg(long)]
        no_highlights: bool,

        /// Print engine notifications as JSON lines
        #[arg(long)]
        events: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}
