use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_API_URL};

pub fn handle(config_path: &PathBuf, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        println!("Config already exists at {}", config_path.display());
        println!("Re-run with --force to overwrite it.");
        return Ok(());
    }

    Config::starter().save_to(config_path)?;

    println!("{} wrote {}", "ok".green().bold(), config_path.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Point api_url at your order API (starter value: {})",
        DEFAULT_API_URL
    );
    println!("  2. Run `orderdesk health` to check the connection");
    println!("  3. Run `orderdesk` to open the board");

    Ok(())
}
