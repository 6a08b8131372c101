//! Smoke tests for the fingertip CLI

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the fingertip binary
fn fingertip() -> Command {
    let mut cmd = Command::cargo_bin("fingertip").expect("fingertip binary should exist");
    cmd.env_remove("FINGERTIP_CONFIG").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_help_flag() {
    fingertip()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pinch"))
        .stdout(predicate::str::contains("drag"))
        .stdout(predicate::str::contains("tap"));
}

#[test]
fn test_no_args_fails() {
    fingertip().assert().failure();
}

// ============================================================================
// Gestures
// ============================================================================

#[test]
fn test_pinch_text_trace() {
    fingertip()
        .args([
            "pinch", "--center", "0,0", "--from", "10,0", "--to", "50,0", "--steps", "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("down  #0 (-10, 0)"))
        .stdout(predicate::str::contains("move  #1 (50, 0)"))
        .stdout(predicate::str::contains("pinch: 14 events, 4 sleeps"));
}

#[test]
fn test_pinch_json_trace() {
    let output = fingertip()
        .args([
            "pinch", "--center", "100,100", "--from", "40,0", "--to", "10,0", "--steps", "3",
            "--format", "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let events = report["events"].as_array().unwrap();
    assert_eq!(events.len(), 2 + 6 + 2 + 2);
    assert_eq!(events[0]["phase"], "down");
    assert_eq!(events[0]["point"]["x"], 60.0);
    assert_eq!(events[events.len() - 1]["phase"], "up");
}

#[test]
fn test_pinch_zero_steps_is_rejected() {
    fingertip()
        .args([
            "pinch", "--center", "0,0", "--from", "1,0", "--to", "2,0", "--steps", "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("steps must be at least 1"));
}

#[test]
fn test_drag_with_negative_coordinates() {
    fingertip()
        .args(["drag", "--from", "-5,-5", "--to", "5,5", "--steps", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("drag: 5 events, 2 sleeps"));
}

#[test]
fn test_tap() {
    fingertip()
        .args(["tap", "--at", "3,4", "--hold-ms", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tap: 2 events, 1 sleeps, 40.000 ms virtual"));
}

#[test]
fn test_bad_point_is_a_usage_error() {
    fingertip()
        .args(["tap", "--at", "3;4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected X,Y"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_sets_pacing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fingertip.yaml");
    fs::write(&path, "steps: 2\nstep_delay_ms: 10\n").unwrap();

    fingertip()
        .arg("--config")
        .arg(&path)
        .args(["pinch", "--center", "0,0", "--from", "1,0", "--to", "3,0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pinch: 10 events, 2 sleeps, 20.000 ms virtual"));
}

#[test]
fn test_config_subcommand_prints_yaml() {
    fingertip()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("steps: 100"))
        .stdout(predicate::str::contains("max_fingers: 9"));
}

#[test]
fn test_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fingertip.yaml");
    fs::write(&path, "max_fingers: 0\n").unwrap();

    fingertip()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_fingers must be at least 1"));
}
