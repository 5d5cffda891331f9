#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn devkit(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("devkit").unwrap();
    cmd.env("DEVKIT_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("DEVKIT_LOG");
    cmd
}

fn initialized() -> TempDir {
    let home = TempDir::new().unwrap();
    devkit(home.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));
    home
}

#[test]
fn test_convert_binary() {
    let home = initialized();
    devkit(home.path())
        .args(["--lang", "en", "convert", "1010", "--base", "binary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Results:"))
        .stdout(predicate::str::contains("0b1010"))
        .stdout(predicate::str::contains("0o12"))
        .stdout(predicate::str::contains("0xa"));
}

#[test]
fn test_convert_hex_json() {
    let home = initialized();
    let output = devkit(home.path())
        .args(["convert", "0x1F", "-b", "hex", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["conversion"]["decimal"], "31");
    assert_eq!(value["source_radix"], "hexadecimal");
}

#[test]
fn test_convert_negative_decimal() {
    let home = initialized();
    devkit(home.path())
        .args(["convert", "-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-0b1010"));
}

#[test]
fn test_convert_invalid_binary_fails() {
    let home = initialized();
    devkit(home.path())
        .args(["--lang", "en", "convert", "12", "-b", "2"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Conversion Error: Binary can only contain 0 and 1",
        ));
}

#[test]
fn test_convert_empty_fails() {
    let home = initialized();
    devkit(home.path())
        .args(["convert", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a number"));
}

#[test]
fn test_convert_stream_continues_after_errors() {
    let home = initialized();
    devkit(home.path())
        .args(["--lang", "en", "convert", "--base", "binary"])
        .write_stdin("1010\n12\n\n11\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0b1010"))
        .stdout(predicate::str::contains("0x3"))
        .stderr(predicate::str::contains("Binary can only contain 0 and 1"));
}

#[test]
fn test_ref_list_sorted() {
    let home = initialized();
    let output = devkit(home.path())
        .args(["--lang", "en", "ref"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let array = stdout.find("array").unwrap();
    let vector = stdout.find("vector").unwrap();
    assert!(array < vector);
}

#[test]
fn test_ref_map_chinese() {
    let home = initialized();
    devkit(home.path())
        .args(["ref", "map"])
        .assert()
        .success()
        .stdout(predicate::str::contains("关联容器"))
        .stdout(predicate::str::contains("find(key)"))
        .stdout(predicate::str::contains("函数"));
}

#[test]
fn test_ref_map_english_json() {
    let home = initialized();
    let output = devkit(home.path())
        .args(["reference", "map", "--lang", "en", "--output", "json"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["description"]
        .as_str()
        .unwrap()
        .contains("associative container"));
    assert_eq!(value["operations"][2]["signature"], "find(key)");
}

#[test]
fn test_ref_unknown_fails() {
    let home = initialized();
    devkit(home.path())
        .args(["ref", "deque"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown data structure: deque"));
}

#[test]
fn test_failed_command_still_writes_config() {
    let home = TempDir::new().unwrap();
    devkit(home.path()).args(["ref", "deque"]).assert().failure();

    let raw = fs::read_to_string(home.path().join("config.json")).unwrap();
    assert!(raw.contains("\"language\": \"zh\""));
}

#[test]
fn test_config_rejects_path_like_language() {
    let home = initialized();
    devkit(home.path())
        .args(["config", "language", "../escape"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid language code"));

    let raw = fs::read_to_string(home.path().join("config.json")).unwrap();
    assert!(raw.contains("\"language\": \"zh\""));
}

#[test]
fn test_lang_switch_persists() {
    let home = initialized();
    devkit(home.path())
        .args(["lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Language switched to English"));

    devkit(home.path())
        .args(["config", "language"])
        .assert()
        .success()
        .stdout(predicate::str::contains("en"));

    devkit(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Developer Toolbox"));
}

#[test]
fn test_lang_override_is_not_persisted() {
    let home = initialized();
    devkit(home.path())
        .args(["--lang", "en", "ref"])
        .assert()
        .success();

    let raw = fs::read_to_string(home.path().join("config.json")).unwrap();
    assert!(raw.contains("\"zh\""));
}

#[test]
fn test_missing_resources_fall_back() {
    let home = TempDir::new().unwrap();
    devkit(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing translation"))
        .stdout(predicate::str::contains("Unknown"));

    // config is written back at exit
    let raw = fs::read_to_string(home.path().join("config.json")).unwrap();
    assert!(raw.contains("\"language\": \"zh\""));
}

#[test]
fn test_malformed_config_uses_defaults() {
    let home = initialized();
    fs::write(home.path().join("config.json"), "{ broken").unwrap();
    devkit(home.path())
        .args(["config", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown"));
}

#[test]
fn test_config_set_version() {
    let home = initialized();
    devkit(home.path())
        .args(["config", "version", "9.9.9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("version set to 9.9.9"));

    devkit(home.path())
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("version = 9.9.9"));
}
