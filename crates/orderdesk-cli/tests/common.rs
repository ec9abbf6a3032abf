//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![cfg(test)]
#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

use orderdesk_testing::{MockApi, fixtures};

/// A mock order API plus an isolated config path, torn down on drop.
pub struct TestFixture {
    _temp_dir: TempDir,
    config_path: PathBuf,
    api: MockApi,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("orderdesk").join("config.toml");
        let api = MockApi::spawn();

        Self {
            _temp_dir: temp_dir,
            config_path,
            api,
        }
    }

    pub fn api(&self) -> &MockApi {
        &self.api
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Seed the mock with three orders spanning two vendors and two statuses.
    pub fn seed_sample_orders(&self) {
        self.api.seed(vec![
            fixtures::record_with_extras(
                "ord-0001",
                "Ana Beatriz",
                1530.5,
                "2024-03-01",
                "Construtora Alfa",
                "Vera Lima",
                "pending",
            ),
            fixtures::record_with_extras(
                "ord-0002",
                "Bruno Costa",
                89.9,
                "2024-03-02",
                "Mercado Beta",
                "Vera Lima",
                "confirmed",
            ),
            fixtures::record_with_extras(
                "ord-0003",
                "Carla Dias",
                402.0,
                "2024-03-05",
                "Oficina Gama",
                "Tiago Nunes",
                "pending",
            ),
        ]);
    }

    /// A command wired to the mock server and the isolated config path.
    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("orderdesk");
        cmd.env_remove("ORDERDESK_API_URL")
            .arg("--config")
            .arg(&self.config_path)
            .arg("--api-url")
            .arg(self.api.url())
            .arg("--format")
            .arg("plain");
        cmd
    }

    /// Same wiring without `--api-url`, for tests that exercise how the
    /// URL is resolved from the environment and the config file.
    pub fn command_without_api_url(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("orderdesk");
        cmd.env_remove("ORDERDESK_API_URL")
            .arg("--config")
            .arg(&self.config_path);
        cmd
    }
}
