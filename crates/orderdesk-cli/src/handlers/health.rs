use anyhow::Result;
use orderdesk_client::ApiClient;
use owo_colors::OwoColorize;

use crate::types::OutputFormat;

/// One-shot liveness check. A failure propagates so the process exits
/// non-zero, which is what scripts key off.
pub async fn handle(client: &ApiClient, format: OutputFormat) -> Result<()> {
    match client.check_health().await {
        Ok(()) => {
            match format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({ "api_url": client.base_url(), "healthy": true })
                ),
                OutputFormat::Plain => {
                    println!("{} {} is reachable", "ok".green().bold(), client.base_url())
                }
            }
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("{} ({})", e, client.base_url())),
    }
}
