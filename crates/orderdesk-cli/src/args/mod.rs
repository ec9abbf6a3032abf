// NOTE: Command Organization Rationale
//
// Why a default subcommand (board) instead of a required one?
// - `orderdesk` with no arguments should land the user on the screen they
//   came for; one-shot commands (list, health, init) are the scripting side
// - Global flags (--api-url, --config, --format) apply to every subcommand
//   so a scripted `orderdesk --api-url ... list` needs no per-command setup

mod commands;

pub use commands::*;

use crate::types::OutputFormat;
use clap::Parser;

#[derive(Parser)]
#[command(name = "orderdesk")]
#[command(about = "Manage orders stored behind an HTTP API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the order API (overrides config and ORDERDESK_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Path to the config file (default: platform config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
