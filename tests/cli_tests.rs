//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tidbits() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tidbits"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_version() {
    let mut cmd = tidbits();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("tidbits"));
}

#[test]
fn test_cli_help() {
    let mut cmd = tidbits();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Small everyday helpers"))
        .stdout(predicate::str::contains("summarize"))
        .stdout(predicate::str::contains("find-spec"));
}

#[test]
fn test_summarize_from_stdin() {
    let mut cmd = tidbits();
    cmd.arg("summarize").write_stdin("apple1\napple2\napple3\nbanana\n");
    cmd.assert().success().stdout("apple{1,2,3}\nbanana\n");
}

#[test]
fn test_summarize_json_keeps_order() {
    let mut cmd = tidbits();
    cmd.args(["--format", "json", "summarize", "-"]).write_stdin("zeta\nbeta1\nbeta2\n");
    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("json output");
    assert_eq!(value["beta"], serde_json::json!(["1", "2"]));
    assert_eq!(value["zeta"], serde_json::json!([]));
    let text = String::from_utf8(output).expect("utf8");
    assert!(text.find("\"beta\"").unwrap() < text.find("\"zeta\"").unwrap());
}

#[test]
fn test_summarize_threshold_flag() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("names.txt");
    fs::write(&input, "ab1\nab2\nab3\n").expect("write input");

    let mut cmd = tidbits();
    cmd.args(["summarize", "--group-threshold", "4"]).arg(&input);
    cmd.assert().success().stdout("ab1\nab2\nab3\n");
}

#[test]
fn test_sort_is_natural() {
    let mut cmd = tidbits();
    cmd.arg("sort").write_stdin("file10\nfile2\nFile1\n");
    cmd.assert().success().stdout("File1\nfile2\nfile10\n");
}

#[test]
fn test_average_arguments() {
    let mut cmd = tidbits();
    cmd.args(["average", "40", "30", "50", "46", "39", "44"]);
    cmd.assert().success().stdout("40\n42\n45\n43\n");
}

#[test]
fn test_average_stdin_with_window() {
    let mut cmd = tidbits();
    cmd.args(["average", "--window", "2"]).write_stdin("1 2\n-3\n");
    cmd.assert().success().stdout("1.5\n-0.5\n");
}

#[test]
fn test_average_rejects_zero_window() {
    let mut cmd = tidbits();
    cmd.args(["average", "-w", "0", "1", "2"]);
    cmd.assert().failure().stderr(predicate::str::contains("window"));
}

#[test]
fn test_find_file_probes_tails() {
    let dir = TempDir::new().expect("temp dir");
    fs::create_dir_all(dir.path().join("conf")).expect("mkdir");
    fs::write(dir.path().join("conf/app.toml"), "").expect("write");

    let mut cmd = tidbits();
    cmd.args(["find-file", "--root"]).arg(dir.path()).arg("etc/conf/app.toml");
    cmd.assert().success().stdout(predicate::str::contains("app.toml"));
}

#[test]
fn test_find_file_reports_missing() {
    let dir = TempDir::new().expect("temp dir");
    let mut cmd = tidbits();
    cmd.args(["find-file", "--root"]).arg(dir.path()).arg("nothing.txt");
    cmd.assert().failure().stderr(predicate::str::contains("No file found"));
}

#[test]
fn test_find_spec_in_working_directory() {
    let dir = TempDir::new().expect("temp dir");
    fs::create_dir_all(dir.path().join("logs")).expect("mkdir");
    fs::write(dir.path().join("logs/today.log"), "").expect("write");

    let mut cmd = tidbits();
    cmd.arg("-C").arg(dir.path()).args(["find-spec", "var/logs/*.log"]);
    cmd.assert().success().stdout(predicate::str::contains("logs"));
}

#[test]
fn test_scan_prints_offsets() {
    let dir = TempDir::new().expect("temp dir");
    let file = dir.path().join("data.txt");
    fs::write(&file, "abcabcab").expect("write");

    let mut cmd = tidbits();
    cmd.args(["scan", "ab"]).arg(&file);
    cmd.assert().success().stdout("0\n3\n6\n");

    let mut cmd = tidbits();
    cmd.args(["scan", "--count", "abc"]).arg(&file);
    cmd.assert().success().stdout("2\n");
}

#[test]
fn test_scan_missing_file() {
    let mut cmd = tidbits();
    cmd.args(["scan", "x", "/no/such/file.txt"]);
    cmd.assert().failure().stderr(predicate::str::contains("Path not found"));
}

#[test]
fn test_copy_with_memory_backend() {
    let mut cmd = tidbits();
    cmd.args(["copy", "--backend", "memory", "hello"]);
    cmd.assert().success().stdout("(copied to clipboard)\n");
}

#[test]
fn test_copy_rejects_invalid_backend() {
    let mut cmd = tidbits();
    cmd.args(["copy", "--backend", "tk", "hello"]);
    cmd.assert().failure().stderr(predicate::str::contains("Invalid clipboard backend"));
}

#[test]
fn test_config_reads_file_from_directory() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("tidbits.toml"), "[summary]\ngroup_threshold = 3\n").expect("write");

    let mut cmd = tidbits();
    cmd.arg("-C").arg(dir.path()).arg("config");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("group_threshold = 3"))
        .stdout(predicate::str::contains("moving_average_window = 3"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let mut cmd = tidbits();
    cmd.args(["--config", "/no/such/tidbits.toml", "config"]);
    cmd.assert().failure().stderr(predicate::str::contains("Failed to load configuration"));
}
