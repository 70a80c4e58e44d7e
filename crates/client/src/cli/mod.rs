//! CLI command definitions.

pub mod events;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the huddle API.
#[derive(Debug, Parser)]
#[command(name = "huddle-client")]
#[command(about = "CLI client for the huddle API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "HUDDLE_URL", default_value = "http://localhost:5000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Event and RSVP management.
    Events(events::EventsCommand),
    /// Store and cache health check.
    Health,
}
