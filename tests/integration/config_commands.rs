#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli_cmd(cwd: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("langgraph-client-cli"));
    cmd.current_dir(cwd.path())
        .env_remove("LANGGRAPH_API_URL")
        .env_remove("LANGGRAPH_API_KEY")
        .env_remove("LANGGRAPH_TIMEOUT")
        .env_remove("LANGGRAPH_RETRIES")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_config_init_writes_starter_file() {
    let temp = TempDir::new().unwrap();

    cli_cmd(&temp)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("langgraph-cli.json")).unwrap())
            .unwrap();
    assert_eq!(written["url"], "http://localhost:2024");
    assert_eq!(written["apiKey"], "your-api-key-here");
    assert_eq!(written["timeout"], 30000);
    assert_eq!(written["retries"], 3);
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("langgraph-cli.json");
    fs::write(&path, r#"{"url": "https://mine.example.com"}"#).unwrap();

    cli_cmd(&temp)
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Use --force to overwrite"));
    assert!(fs::read_to_string(&path).unwrap().contains("mine.example.com"));

    cli_cmd(&temp)
        .args(["config", "init", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&path).unwrap().contains("localhost:2024"));
}

#[test]
fn test_config_show_masks_api_key() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("langgraph-cli.json"),
        r#"{"url": "https://file.example.com", "apiKey": "super-secret"}"#,
    )
    .unwrap();

    cli_cmd(&temp)
        .env("LANGGRAPH_TIMEOUT", "5000")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://file.example.com"))
        .stdout(predicate::str::contains("***set***"))
        .stdout(predicate::str::contains("5000"))
        .stdout(predicate::str::contains("super-secret").not());
}

#[test]
fn test_config_show_explicit_path() {
    let temp = TempDir::new().unwrap();
    let custom = temp.path().join("custom.json");
    fs::write(&custom, r#"{"url": "https://custom.example.com"}"#).unwrap();

    cli_cmd(&temp)
        .args(["config", "show", "-c"])
        .arg(&custom)
        .assert()
        .success()
        .stdout(predicate::str::contains("https://custom.example.com"));
}
