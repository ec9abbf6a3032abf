//! Verifies how the API URL is resolved: --api-url flag over
//! ORDERDESK_API_URL over the config file.
//!
//! Each case points the losing sources at a dead address, so a wrong
//! winner shows up as a connection failure.

mod common;
use common::TestFixture;

use std::fs;

use predicates::prelude::*;

const DEAD_URL: &str = "http://127.0.0.1:9";

fn write_config(fixture: &TestFixture, api_url: &str) {
    let parent = fixture
        .config_path()
        .parent()
        .expect("config path has a parent");
    fs::create_dir_all(parent).expect("Failed to create config dir");
    fs::write(
        fixture.config_path(),
        format!("api_url = \"{}\"\n", api_url),
    )
    .expect("Failed to write config");
}

#[test]
fn test_config_file_supplies_api_url() {
    let fixture = TestFixture::new();
    fixture.seed_sample_orders();
    write_config(&fixture, &fixture.api().url());

    let mut cmd = fixture.command_without_api_url();
    cmd.arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana Beatriz"));
}

#[test]
fn test_env_var_overrides_config_file() {
    let fixture = TestFixture::new();
    fixture.seed_sample_orders();
    write_config(&fixture, DEAD_URL);

    let mut cmd = fixture.command_without_api_url();
    cmd.env("ORDERDESK_API_URL", fixture.api().url())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana Beatriz"));
}

#[test]
fn test_flag_overrides_env_var() {
    let fixture = TestFixture::new();
    fixture.seed_sample_orders();

    // command() passes --api-url pointing at the mock
    let mut cmd = fixture.command();
    cmd.env("ORDERDESK_API_URL", DEAD_URL)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana Beatriz"));
}

#[test]
fn test_blank_env_var_is_ignored() {
    let fixture = TestFixture::new();
    fixture.seed_sample_orders();
    write_config(&fixture, &fixture.api().url());

    let mut cmd = fixture.command_without_api_url();
    cmd.env("ORDERDESK_API_URL", "")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana Beatriz"));
}
