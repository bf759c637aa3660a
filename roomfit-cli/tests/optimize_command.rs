//! Integration tests for the `optimize` command.

mod common;

use common::{parse_json, TestEnv};
use predicates::prelude::*;

// ============================================================================
// Explicit options
// ============================================================================

#[test]
fn test_optimize_prefers_cheaper_option_up_to_its_cap() {
    let env = TestEnv::new();

    let output = env
        .command()
        .args([
            "optimize", "--days", "4", "--option", "A=100:3", "--option", "B=80:2",
        ])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "optimize failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json = parse_json(&output.stdout);
    assert_eq!(json["totalCost"], 360.0);
    assert_eq!(json["totalDays"], 4);
    assert_eq!(json["allocation"][0]["roomId"], "A");
    assert_eq!(json["allocation"][0]["days"], 2);
    assert_eq!(json["allocation"][1]["roomId"], "B");
    assert_eq!(json["allocation"][1]["days"], 2);
}

#[test]
fn test_optimize_exact_capacity() {
    let env = TestEnv::new();

    let output = env
        .command()
        .args([
            "optimize", "--days", "5", "--option", "A=100:3", "--option", "B=80:2",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = parse_json(&output.stdout);
    assert_eq!(json["totalCost"], 460.0);
}

#[test]
fn test_optimize_human_format() {
    let env = TestEnv::new();

    env.command()
        .args([
            "optimize", "--days", "3", "--option", "A=50:5", "--format", "human",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cheapest split of 3 day(s): 150.00"))
        .stdout(predicate::str::contains("  A: 3 day(s)"));
}

#[test]
fn test_optimize_csv_format() {
    let env = TestEnv::new();

    env.command()
        .args([
            "optimize", "--days", "2", "--option", "A=50:5", "--format", "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "roomId,days,totalDays,totalCost\nA,2,2,100.0\n",
        ));
}

#[test]
fn test_optimize_csv_reports_minimum_cost() {
    let env = TestEnv::new();

    let output = env
        .command()
        .args([
            "optimize", "--days", "12", "--option", "A=50:10", "--option", "B=80:10",
            "--format", "csv",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
    assert_eq!(
        stdout,
        "roomId,days,totalDays,totalCost\nA,10,12,660.0\nB,2,12,660.0\n"
    );
}

// ============================================================================
// Options from the snapshot
// ============================================================================

#[test]
fn test_optimize_from_room_type() {
    let env = TestEnv::new();

    let output = env
        .command_with_rooms()
        .args([
            "optimize", "--days", "5", "--type", "Standard", "--max-days", "2",
        ])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "optimize failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // S2 is unavailable; S1, S3 and S4 split the stay cheapest-first
    let json = parse_json(&output.stdout);
    assert_eq!(json["totalCost"], 640.0);
    let ids: Vec<&str> = json["allocation"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["roomId"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["S1", "S3", "S4"]);
}

#[test]
fn test_optimize_type_without_available_rooms() {
    let env = TestEnv::new();

    env.command_with_rooms()
        .args(["optimize", "--days", "1", "--type", "VIP", "--max-days", "3"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no available rooms of type 'VIP'"));
}

#[test]
fn test_optimize_type_requires_max_days() {
    let env = TestEnv::new();

    env.command_with_rooms()
        .args(["optimize", "--days", "1", "--type", "Standard"])
        .assert()
        .failure()
        .code(2);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_optimize_over_capacity_is_infeasible() {
    let env = TestEnv::new();

    env.command()
        .args([
            "optimize", "--days", "6", "--option", "A=100:3", "--option", "B=80:2",
        ])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "stay of 6 day(s) exceeds the combined capacity of 5 day(s)",
        ));
}

#[test]
fn test_optimize_zero_days_rejected() {
    let env = TestEnv::new();

    env.command()
        .args(["optimize", "--days", "0", "--option", "A=100:3"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("--days"));
}

#[test]
fn test_optimize_malformed_option() {
    let env = TestEnv::new();

    env.command()
        .args(["optimize", "--days", "2", "--option", "A=cheap:3"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("price"));
}

#[test]
fn test_optimize_requires_an_option_source() {
    let env = TestEnv::new();

    env.command()
        .args(["optimize", "--days", "2"])
        .assert()
        .failure()
        .code(2);
}
