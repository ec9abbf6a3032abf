use super::args::{Cli, Commands};
use super::handlers;
use crate::config::{self, Config};
use anyhow::Result;
use orderdesk_client::{ApiClient, DEFAULT_TIMEOUT_SECS};
use std::path::PathBuf;
use std::time::Duration;

pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        api_url,
        config: config_flag,
        format,
        command,
    } = cli;

    let config_path = config::resolve_config_path(config_flag.as_deref())?;

    match command.unwrap_or(Commands::Board) {
        Commands::Board => {
            let client = build_client(api_url.as_deref(), &config_path)?;
            runtime()?.block_on(handlers::board::handle(client))
        }

        Commands::List { status, vendor } => {
            let client = build_client(api_url.as_deref(), &config_path)?;
            runtime()?.block_on(handlers::list::handle(&client, status, vendor, format))
        }

        Commands::Health => {
            let client = build_client(api_url.as_deref(), &config_path)?;
            runtime()?.block_on(handlers::health::handle(&client, format))
        }

        Commands::Init { force } => handlers::init::handle(&config_path, force),
    }
}

fn build_client(api_url_flag: Option<&str>, config_path: &PathBuf) -> Result<ApiClient> {
    let file = Config::load_from(config_path)?;
    let api_url = config::resolve_api_url(api_url_flag, &file);
    let timeout = Duration::from_secs(file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
    Ok(ApiClient::with_timeout(&api_url, timeout)?)
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Runtime::new()?)
}
