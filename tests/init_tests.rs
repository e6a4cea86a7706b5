//! Integration tests for init command and profile discovery

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{folio_cmd, write_sample_profile};

#[test]
fn test_init_creates_profile() {
    let temp = TempDir::new().unwrap();

    folio_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    assert!(temp.path().join("folio.toml").exists());
}

#[test]
fn test_init_twice_fails() {
    let temp = TempDir::new().unwrap();

    folio_cmd().arg("init").arg(temp.path()).assert().success();

    folio_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_then_commands_work() {
    let temp = TempDir::new().unwrap();

    folio_cmd().arg("init").arg(temp.path()).assert().success();

    // The starter profile feeds every view.
    folio_cmd()
        .current_dir(temp.path())
        .arg("about")
        .assert()
        .success()
        .stdout(predicate::str::contains("email:"));

    folio_cmd()
        .current_dir(temp.path())
        .arg("timeline")
        .assert()
        .success()
        .stdout(predicate::str::contains("[award]"));
}

#[test]
fn test_discovery_walks_up_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    write_sample_profile(temp.path());

    let subdir = temp.path().join("notes").join("deep");
    fs::create_dir_all(&subdir).unwrap();

    folio_cmd()
        .current_dir(&subdir)
        .arg("about")
        .assert()
        .success()
        .stdout(predicate::str::contains("Casey Jordan"));
}

#[test]
fn test_missing_profile_reports_suggestions() {
    let temp = TempDir::new().unwrap();

    folio_cmd()
        .current_dir(temp.path())
        .arg("about")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("folio init"));
}

#[test]
fn test_folio_root_env_overrides_discovery() {
    let temp = TempDir::new().unwrap();
    write_sample_profile(temp.path());

    let elsewhere = TempDir::new().unwrap();

    folio_cmd()
        .current_dir(elsewhere.path())
        .env("FOLIO_ROOT", temp.path())
        .arg("about")
        .assert()
        .success()
        .stdout(predicate::str::contains("Casey Jordan"));
}

#[test]
fn test_invalid_profile_toml_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("folio.toml"), "name = ").unwrap();

    folio_cmd()
        .current_dir(temp.path())
        .arg("about")
        .assert()
        .failure()
        .stderr(predicate::str::contains("folio.toml"));
}
