// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! End-to-end tests for the three invocation modes of the checker binary.

use assert_cmd::Command;
use predicates::prelude::*;
use rstest::rstest;
use std::path::Path;
use tempfile::TempDir;

fn checker(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("checker").unwrap();
    cmd.current_dir(cwd);
    cmd
}

fn write_pair(dir: &Path, prefix: &str, output: &str, expected: &str) {
    std::fs::write(dir.join(format!("{prefix}-output.txt")), output).unwrap();
    std::fs::write(dir.join(format!("{prefix}-expected.txt")), expected).unwrap();
}

const MIXED_REPORT: &str = "\
Total: 66.67% 2/3
Proportions of expected results right:
\tMatch         100.00% 1/1 + 1 unexpected
\tNo match      0.00% 0/1 + 0 unexpected
\tSyntax error  100.00% 1/1 + 0 unexpected
\tOther error   0.00% 0/0 + 0 unexpected
Wrote list of 1 mismatched lines to mismatches.txt

Total: 66.67% 2/3
";

// =============================================================================
// Usage
// =============================================================================

#[rstest]
#[case(&[])]
#[case(&["a", "b", "c"])]
fn usage_exits_zero(#[case] args: &[&str]) {
    let dir = TempDir::new().unwrap();
    checker(dir.path())
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--all"));
}

// =============================================================================
// Pair mode
// =============================================================================

#[test]
fn pair_mode_reports_and_writes_mismatches() {
    let dir = TempDir::new().unwrap();
    write_pair(
        dir.path(),
        "parens",
        "YE x\nYE y\nSY z\n",
        "YE pattern1\nNO pattern2\nSY pattern3\n",
    );

    checker(dir.path())
        .args(["parens-output.txt", "parens-expected.txt"])
        .assert()
        .success()
        .stdout(MIXED_REPORT);

    let report = std::fs::read_to_string(dir.path().join("mismatches.txt")).unwrap();
    assert_eq!(
        report,
        "Mismatch on line 2:\n  Expected: NO pattern2\n  But got:  YE y\n"
    );
}

#[test]
fn prefix_mode_matches_explicit_pair() {
    let dir = TempDir::new().unwrap();
    write_pair(
        dir.path(),
        "parens",
        "YE x\nYE y\nSY z\n",
        "YE pattern1\nNO pattern2\nSY pattern3\n",
    );

    checker(dir.path())
        .arg("parens")
        .assert()
        .success()
        .stdout(MIXED_REPORT);
}

#[test]
fn pair_mode_all_correct_leaves_no_file() {
    let dir = TempDir::new().unwrap();
    write_pair(dir.path(), "wild", "YE a\nNO b\n", "YE a\nNO b\n");

    checker(dir.path())
        .arg("wild")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Total: 100.00% 2/2\n"))
        .stdout(predicate::str::contains("Wrote list").not());

    assert!(!dir.path().join("mismatches.txt").exists());
}

#[test]
fn pair_mode_truncated_output() {
    let dir = TempDir::new().unwrap();
    write_pair(dir.path(), "short", "YE a\nNO b\n", "YE a\nNO b\nSY c\nER d\n");

    checker(dir.path())
        .arg("short")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Missing: 50.00% 2/4\nOutput file finished early!\n",
        ))
        .stdout(predicate::str::contains("Total: 50.00% 2/4"));
}

#[test]
fn pair_mode_longer_output_warns() {
    let dir = TempDir::new().unwrap();
    write_pair(dir.path(), "long", "YE a\nNO b\nNO c\n", "YE a\nNO b\n");

    checker(dir.path())
        .arg("long")
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing").not())
        .stderr("Warning: output has 1 more lines than expected; extra lines ignored\n");
}

#[test]
fn pair_mode_custom_mismatch_path() {
    let dir = TempDir::new().unwrap();
    write_pair(dir.path(), "parens", "NO a\n", "YE a\n");

    checker(dir.path())
        .args(["--mismatches", "report.txt", "parens"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Wrote list of 1 mismatched lines to report.txt",
        ));

    assert!(dir.path().join("report.txt").exists());
    assert!(!dir.path().join("mismatches.txt").exists());
}

#[test]
fn pair_mode_json() {
    let dir = TempDir::new().unwrap();
    write_pair(dir.path(), "parens", "YE a\nNO b\n", "YE a\nSY b\n");

    let output = checker(dir.path())
        .args(["--format", "json", "parens"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["right"], 1);
    assert_eq!(value["total"], 2);
    assert_eq!(value["categories"][2]["code"], "SY");
    assert_eq!(value["categories"][2]["expected"], 1);
}

#[test]
fn pair_mode_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    checker(dir.path())
        .arg("absent")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("Error: Failed to read"))
        .stderr(predicate::str::contains("absent-output.txt"));
}

// =============================================================================
// Batch mode
// =============================================================================

#[test]
fn batch_mode_in_named_dir() {
    let dir = TempDir::new().unwrap();
    let results = dir.path().join("results");
    std::fs::create_dir(&results).unwrap();
    write_pair(&results, "wild", "YE a\nNO b\nNO c\n", "YE a\nYE b\nNO c\n");
    write_pair(&results, "parens", "YE a\n", "YE a\nNO b\n");

    checker(dir.path())
        .args(["--all", "results"])
        .assert()
        .success()
        .stdout("parens      50.00%\nwild        66.67%\n");

    assert!(!dir.path().join("mismatches.txt").exists());
}

#[test]
fn batch_mode_defaults_to_current_dir() {
    let dir = TempDir::new().unwrap();
    write_pair(dir.path(), "alt", "SY a\n", "SY a\n");

    checker(dir.path())
        .arg("--all")
        .assert()
        .success()
        .stdout("alt         100.00%\n");
}

#[test]
fn batch_mode_orphan_output_fails() {
    let dir = TempDir::new().unwrap();
    write_pair(dir.path(), "alt", "SY a\n", "SY a\n");
    std::fs::write(dir.path().join("orphan-output.txt"), "YE a\n").unwrap();

    checker(dir.path())
        .arg("--all")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("orphan-expected.txt"));
}

#[test]
fn batch_mode_json() {
    let dir = TempDir::new().unwrap();
    write_pair(dir.path(), "alt", "SY a\nNO b\n", "SY a\nYE b\n");

    let output = checker(dir.path())
        .args(["--format", "json", "--all"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["prefix"], "alt");
    assert_eq!(value[0]["correct"], 1);
    assert_eq!(value[0]["accuracy"], 0.5);
}
