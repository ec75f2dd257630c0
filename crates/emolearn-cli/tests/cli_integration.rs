//! CLI Integration Tests
//!
//! These tests verify the preview commands end-to-end, wiring the CLI to the
//! core catalogs and session state machine.

use assert_cmd::Command;
use predicates::prelude::*;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("emolearn").expect("Failed to find emolearn binary")
}

// ============================================================================
// Emotions Command Tests
// ============================================================================

#[test]
fn test_emotions_lists_catalog_in_order() {
    let output = cli_cmd().arg("emotions").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let positions: Vec<usize> = ["Calm", "Energetic", "Focused", "Stressed", "Confident"]
        .iter()
        .map(|label| stdout.find(label).expect("label listed"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_emotions_json() {
    cli_cmd()
        .args(["emotions", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"stressed\""))
        .stdout(predicate::str::contains("\"color\": \"emotion-stressed\""));
}

// ============================================================================
// Dashboard Command Tests
// ============================================================================

#[test]
fn test_dashboard_stressed() {
    cli_cmd()
        .args(["dashboard", "stressed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gentle Learning"))
        .stdout(predicate::str::contains("Review familiar topics"))
        .stdout(predicate::str::contains("Short exercises"))
        .stdout(predicate::str::contains("Breathing techniques"))
        .stdout(predicate::str::contains("7 days"))
        .stdout(predicate::str::contains("Completed Math Fundamentals"));
}

#[test]
fn test_dashboard_unknown_falls_back() {
    cli_cmd()
        .args(["dashboard", "grumpy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mindful Learning"))
        .stdout(predicate::str::contains("Meditation basics"))
        .stderr(predicate::str::contains("Unknown emotion"));
}

#[test]
fn test_dashboard_json() {
    cli_cmd()
        .args(["dashboard", "confident", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Challenge Mode\""))
        .stdout(predicate::str::contains("\"emotion\": \"confident\""));
}

// ============================================================================
// Session Command Tests
// ============================================================================

#[test]
fn test_session_elapse_opens_dashboard() {
    cli_cmd()
        .args(["session", "select:focused", "elapse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(entered dashboard)"))
        .stdout(predicate::str::contains("Deep Focus Mode"));
}

#[test]
fn test_session_reset_clears_selection() {
    cli_cmd()
        .args(["session", "select:calm", "start", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(back to selection)"))
        .stdout(predicate::str::contains("selected=-"))
        .stdout(predicate::str::contains("Mindful Learning").not());
}

#[test]
fn test_session_unknown_select_falls_back() {
    cli_cmd()
        .args(["session", "select:sleepy", "start"])
        .assert()
        .success()
        .stdout(predicate::str::contains("selected=calm"))
        .stdout(predicate::str::contains("Mindful Learning"))
        .stderr(predicate::str::contains("Unknown emotion"));
}

#[test]
fn test_session_rejects_unknown_event() {
    cli_cmd()
        .args(["session", "select:calm", "jump"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot replay event 'jump'"));
}
