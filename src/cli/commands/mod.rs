//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `stats`: Catalog statistics report
//! - `config`: Configuration inspection

mod config;
mod stats;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use config::cmd_config;
pub use stats::{OutputFormat, cmd_stats, render_text};

/// Vinyl Stats CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Compute statistics for a catalog
    Stats {
        /// Path to the catalog JSON file (defaults to catalog.path from the config)
        path: Option<PathBuf>,
        /// Output format: text, json (defaults to output.format from the config)
        #[arg(short, long)]
        format: Option<String>,
        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },
    /// Show the configuration file location and resolved settings
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Run the specified CLI command.
///
/// Returns `Ok(true)` if a command was run, `Ok(false)` if no command was
/// specified (meaning help should be shown).
pub fn run_command(cli: &Cli) -> anyhow::Result<bool> {
    let config = crate::config::load();

    match &cli.command {
        Some(Commands::Stats {
            path,
            format,
            compact,
        }) => {
            cmd_stats(&config, path.as_ref(), format.as_deref(), *compact)?;
            Ok(true)
        }
        Some(Commands::Config { init }) => {
            cmd_config(&config, *init)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
