use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_respects_home() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("chatgate")
        .env("CHATGATE_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(dir.path().to_string_lossy().as_ref()))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file_once() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    cargo_bin_cmd!("chatgate")
        .env("CHATGATE_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("server_url"));

    cargo_bin_cmd!("chatgate")
        .env("CHATGATE_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "server_url = [").unwrap();

    cargo_bin_cmd!("chatgate")
        .env("CHATGATE_HOME", dir.path())
        .env_remove("CHATGATE_SERVER_URL")
        .args(["login", "--email", "a@b.c", "--password", "pw"])
        .assert()
        .failure();
}
