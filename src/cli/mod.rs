//! Command-line interface for vinyl-stats.
//!
//! Loads a catalog, runs the statistics engine over it and prints the
//! report as text or JSON.

mod commands;

pub use commands::{Cli, Commands, OutputFormat, render_text, run_command};
