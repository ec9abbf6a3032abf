//! Init command tests.

mod common;
use common::TestFixture;

use std::fs;

use predicates::prelude::*;

#[test]
fn test_init_writes_starter_config() {
    let fixture = TestFixture::new();

    let mut cmd = fixture.command();
    cmd.arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote"))
        .stdout(predicate::str::contains(
            fixture.config_path().display().to_string(),
        ));

    let content = fs::read_to_string(fixture.config_path()).expect("Config file missing");
    assert!(content.contains("api_url = \"http://localhost:3000\""));
    assert!(content.contains("timeout_secs = 10"));
}

#[test]
fn test_init_leaves_existing_config_alone() {
    let fixture = TestFixture::new();

    let mut cmd = fixture.command();
    cmd.arg("init").assert().success();

    // A hand-edited config must survive a second init
    fs::write(fixture.config_path(), "api_url = \"http://example.test\"\n")
        .expect("Failed to edit config");

    let mut cmd = fixture.command();
    cmd.arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"))
        .stdout(predicate::str::contains("--force"));

    let content = fs::read_to_string(fixture.config_path()).expect("Config file missing");
    assert_eq!(content, "api_url = \"http://example.test\"\n");
}

#[test]
fn test_init_force_overwrites_config() {
    let fixture = TestFixture::new();

    let mut cmd = fixture.command();
    cmd.arg("init").assert().success();

    fs::write(fixture.config_path(), "api_url = \"http://example.test\"\n")
        .expect("Failed to edit config");

    let mut cmd = fixture.command();
    cmd.arg("init").arg("--force").assert().success();

    let content = fs::read_to_string(fixture.config_path()).expect("Config file missing");
    assert!(content.contains("api_url = \"http://localhost:3000\""));
}
