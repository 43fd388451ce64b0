//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data
//! directory and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "tasksense-cli", "--quiet", "--"])
        .args(args)
        .env("TASKSENSE_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_task_add_complete_delete_flow() {
    let (stdout, stderr, code) = run_cli(&["task", "add", "Finish urgent report tomorrow, 2 hours"]);
    assert_eq!(code, 0, "task add failed: {stderr}");
    let first_line = stdout.lines().next().unwrap_or_default();
    let id = first_line
        .strip_prefix("Task created: ")
        .expect("missing task id line")
        .to_string();
    assert!(stdout.contains("\"priority\": \"urgent\""));

    let (stdout, _, code) = run_cli(&["task", "get", &id]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Finish report , 2 hours"));

    let (_, _, code) = run_cli(&["suggest", "schedule", &id]);
    assert_eq!(code, 0);

    let (_, _, code) = run_cli(&["suggest", "deadline", &id]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(&["remind", "schedule", &id]);
    assert_eq!(code, 0);
    assert!(stdout.contains("reminder(s)"));

    let (stdout, _, code) = run_cli(&["task", "complete", &id]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Task completed"));

    let (stdout, _, code) = run_cli(&["task", "delete", &id]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Task deleted"));
}

#[test]
fn test_task_list_is_json() {
    let (stdout, stderr, code) = run_cli(&["task", "list"]);
    assert_eq!(code, 0, "task list failed: {stderr}");
    assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());
}

#[test]
fn test_insights_and_stats() {
    let (_, stderr, code) = run_cli(&["insights"]);
    assert_eq!(code, 0, "insights failed: {stderr}");

    let (stdout, stderr, code) = run_cli(&["stats"]);
    assert_eq!(code, 0, "stats failed: {stderr}");
    let stats: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(stats.get("total").is_some());
}

#[test]
fn test_breakdown_uses_template() {
    let (stdout, stderr, code) = run_cli(&["breakdown", "Ship the migration project"]);
    assert_eq!(code, 0, "breakdown failed: {stderr}");
    assert!(stdout.contains("Research and planning"));
}

#[test]
fn test_config_get_and_set() {
    let (stdout, _, code) = run_cli(&["config", "get", "parser.default_estimated_minutes"]);
    assert_eq!(code, 0);
    assert!(!stdout.trim().is_empty());

    let (_, _, code) = run_cli(&["config", "set", "notifications.enabled", "true"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("notifications"));
}

#[test]
fn test_missing_task_errors_cleanly() {
    let (_, stderr, code) = run_cli(&["suggest", "schedule", "no-such-id"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}
