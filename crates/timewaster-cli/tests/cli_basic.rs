//! Basic CLI E2E tests.
//!
//! Tests invoke the non-interactive subcommands via cargo run and verify
//! outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "timewaster-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_score_outputs_json() {
    let (stdout, _, code) = run_cli(&["score", "--clicks", "10", "--seconds", "120"]);
    assert_eq!(code, 0, "Score failed");
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    assert_eq!(report["tier_label"], "Why Clicking");
    assert_eq!(report["elapsed"], "02:00");
}

#[test]
fn test_score_certified_chaos() {
    let (stdout, _, code) = run_cli(&["score", "--clicks", "50", "--seconds", "0"]);
    assert_eq!(code, 0);
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    assert_eq!(report["tier_label"], "Certified Chaos");
}

#[test]
fn test_score_seed_is_reproducible() {
    let args = ["score", "--clicks", "0", "--seconds", "0", "--seed", "7"];
    let (first, _, code_a) = run_cli(&args);
    let (second, _, code_b) = run_cli(&args);
    assert_eq!(code_a, 0);
    assert_eq!(code_b, 0);
    assert_eq!(first, second);
}

#[test]
fn test_score_requires_counters() {
    let (_, _, code) = run_cli(&["score"]);
    assert_ne!(code, 0, "Score without counters should fail");
}

#[test]
fn test_titles_lists_all_pools() {
    let (stdout, _, code) = run_cli(&["titles"]);
    assert_eq!(code, 0, "Titles failed");
    let table: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    let rows = table.as_array().expect("Expected JSON array");
    assert_eq!(rows.len(), 4);
    for row in rows {
        assert_eq!(row["titles"].as_array().map(|t| t.len()), Some(3));
    }
}

#[test]
fn test_config_show() {
    let (stdout, _, code) = run_cli(&["config", "show"]);
    assert_eq!(code, 0, "Config show failed");
    assert!(stdout.contains("intro_delay_secs"));
}

#[test]
fn test_config_path() {
    let (stdout, _, code) = run_cli(&["config", "path"]);
    assert_eq!(code, 0, "Config path failed");
    assert!(stdout.contains("config.toml"));
}
