//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

pub static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(
    name = "swath",
    version,
    about = "Spreader swath-width calibration from catch-pan readings"
)]
pub struct Cli {
    /// Path to session config TOML; a missing file means built-in defaults
    #[arg(long, value_name = "FILE", default_value = "swath.toml")]
    pub config: PathBuf,

    /// Print reports and errors as JSON, and log as JSON lines
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace); RUST_LOG wins when set
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend a swath width from a pan readings CSV
    Analyze {
        /// Readings CSV with headers `pan,amount`
        #[arg(long, value_name = "FILE")]
        readings: PathBuf,
        /// Replace the pan at this 0-based row with its neighbours' mean
        /// (repeatable; applied after the config's selections, in order)
        #[arg(long, value_name = "POS", action = ArgAction::Append)]
        impute: Vec<usize>,
        /// Show the overlap at this swath width instead of the optimum
        #[arg(long, value_name = "WIDTH")]
        width: Option<f64>,
    },
    /// Print an empty readings CSV for the configured pan layout
    Template {
        /// Override pans.count
        #[arg(long, value_name = "N")]
        count: Option<usize>,
        /// Override the pan spacing
        #[arg(long, value_name = "DIST")]
        spacing: Option<f64>,
    },
    /// Print where each pan goes relative to the machine centerline
    Layout,
}
