//! Health command tests.
//!
//! The exit code is the contract here: scripts gate on `orderdesk health`
//! before doing anything else.

mod common;
use common::TestFixture;

use predicates::prelude::*;
use tempfile::TempDir;

use orderdesk_testing::MockApi;

#[test]
fn test_health_reports_reachable_server() {
    let fixture = TestFixture::new();

    let mut cmd = fixture.command();
    cmd.arg("health")
        .assert()
        .success()
        .stdout(predicate::str::contains("is reachable"))
        .stdout(predicate::str::contains(fixture.api().url()));
}

#[test]
fn test_health_json_format() {
    let fixture = TestFixture::new();

    let mut cmd = fixture.command();
    let output = cmd
        .arg("health")
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run health with json format");

    assert!(output.status.success());
    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Parse failed");
    assert_eq!(result["healthy"], true);
    assert_eq!(result["api_url"], fixture.api().url());
}

#[test]
fn test_health_fails_when_server_is_unhealthy() {
    let fixture = TestFixture::new();
    fixture.api().set_healthy(false);

    let mut cmd = fixture.command();
    cmd.arg("health")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: service unavailable"))
        .stderr(predicate::str::contains(fixture.api().url()));
}

#[test]
fn test_health_fails_when_server_is_gone() {
    // Grab an address, then let the server shut down so nothing listens there
    let dead_url = {
        let api = MockApi::spawn();
        api.url()
    };

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("orderdesk");
    cmd.env_remove("ORDERDESK_API_URL")
        .arg("--config")
        .arg(temp_dir.path().join("config.toml"))
        .arg("--api-url")
        .arg(&dead_url)
        .arg("health")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not reach the server"));
}
