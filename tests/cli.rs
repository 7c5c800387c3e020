//! End-to-end tests for the devkit binary

use assert_cmd::Command;
use predicates::prelude::*;

fn devkit() -> Command {
    Command::cargo_bin("devkit").unwrap()
}

#[test]
fn diff_reports_lines_unique_to_a() {
    devkit()
        .args(["diff", "-a", "x\ny\nz", "-b", "y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Arguments line count"))
        .stdout(predicate::str::contains("  -a: 3"))
        .stdout(predicate::str::contains("  -b: 1"))
        .stdout(predicate::str::contains("list diff count: 2"))
        .stdout(predicate::str::contains(">>>\nx\nz\n<<<"));
}

#[test]
fn duplicate_lines_collapse_to_one_entry() {
    devkit()
        .args(["diff", "-a", "a\na\nb", "-b", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  -a: 3"))
        .stdout(predicate::str::contains("list diff count: 1"))
        .stdout(predicate::str::contains(">>>\nb\n<<<"));
}

#[test]
fn identical_inputs_print_no_markers() {
    devkit()
        .args(["diff", "-a", "p\nq", "-b", "p\nq"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list diff count: 0"))
        .stdout(predicate::str::contains(">>>").not())
        .stdout(predicate::str::contains("<<<").not());
}

#[test]
fn empty_inputs_report_zero_counts() {
    devkit()
        .args(["diff", "-a", "", "-b", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("  -a: 0"))
        .stdout(predicate::str::contains("  -b: 0"))
        .stdout(predicate::str::contains("list diff count: 0"));
}

#[test]
fn missing_set_a_is_a_usage_error() {
    devkit()
        .args(["diff", "-b", "y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required option '-a'"));
}

#[test]
fn missing_set_b_is_a_usage_error() {
    devkit()
        .args(["diff", "-a", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required option '-b'"));
}

#[test]
fn no_color_flag_is_accepted() {
    devkit()
        .args(["diff", "--no-color", "-a", "x", "-b", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list diff count: 0"));
}

#[test]
fn help_lists_the_diff_command() {
    devkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("diff"))
        .stdout(predicate::str::contains("set difference"));
}
