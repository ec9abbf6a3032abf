use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Base URL used when neither flag, environment nor config file names one.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("could not parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("could not create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("could not write config file {}", path.display()))?;
        Ok(())
    }

    /// Starter config written by `orderdesk init`.
    pub fn starter() -> Self {
        Config {
            api_url: Some(DEFAULT_API_URL.to_string()),
            timeout_secs: Some(orderdesk_client::DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Resolve the config file path:
/// 1. Explicit `--config` path (with tilde expansion)
/// 2. Platform config directory (e.g. ~/.config/orderdesk/config.toml)
/// 3. ~/.orderdesk/config.toml (fallback for systems without a config dir)
pub fn resolve_config_path(explicit: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(expand_tilde(path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("orderdesk").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".orderdesk").join("config.toml"));
    }

    anyhow::bail!("could not determine a config path: no HOME or config directory found")
}

/// Resolve the API base URL based on priority:
/// 1. `--api-url` flag
/// 2. ORDERDESK_API_URL environment variable
/// 3. `api_url` from the config file
/// 4. Built-in default
pub fn resolve_api_url(flag: Option<&str>, config: &Config) -> String {
    if let Some(url) = flag {
        return url.to_string();
    }

    if let Ok(url) = std::env::var("ORDERDESK_API_URL")
        && !url.trim().is_empty()
    {
        return url;
    }

    if let Some(url) = &config.api_url {
        return url.clone();
    }

    DEFAULT_API_URL.to_string()
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}
