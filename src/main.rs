//! Toetictac - terminal front end
//!
//! Two players share one keyboard and take turns entering cell indices.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::{Path, PathBuf};
use toetictac::{AppConfig, Console, Session};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_FILE: &str = "toetictac.toml";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so the board on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config)?;

    match cli.command {
        Command::Play {
            variant,
            cooldown_ms,
            no_highlights,
            events,
        } => run_play(
            config.with_overrides(variant, cooldown_ms, no_highlights),
            events,
        ),
        Command::Config => {
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
    }
}

/// Resolve the config file: flag, then TOETICTAC_CONFIG, then ./toetictac.toml.
#[instrument]
fn load_config(flag: Option<PathBuf>) -> Result<AppConfig> {
    let explicit = flag.or_else(|| std::env::var_os("TOETICTAC_CONFIG").map(PathBuf::from));

    if let Some(path) = explicit {
        return Ok(AppConfig::from_file(path)?);
    }

    let fallback = Path::new(DEFAULT_CONFIG_FILE);
    if fallback.exists() {
        Ok(AppConfig::from_file(fallback)?)
    } else {
        debug!("No config file found, using defaults");
        Ok(AppConfig::default())
    }
}

/// Run the console game on stdin/stdout
#[instrument(skip(config), fields(variant = %config.variant()))]
fn run_play(config: AppConfig, events: bool) -> Result<()> {
    info!("Starting console game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), Session::new(config))
        .with_event_echo(events);
    console.run()?;

    Ok(())
}
