//! Integration tests for the prompt commands.
//!
//! These tests validate:
//! - Answers on stdout, prompts on stderr
//! - Defaults on blank input and closed input
//! - Exit codes for confirm and closed input
//! - Re-prompting on invalid choices

mod common;

use predicates::prelude::*;

use common::conio_cmd;

// ============================================================================
// ask
// ============================================================================

#[test]
fn test_ask_prints_trimmed_answer() {
    conio_cmd()
        .args(["ask", "Name"])
        .write_stdin("  hi  \n")
        .assert()
        .success()
        .stdout("hi\n")
        .stderr(predicate::str::contains("Name:\n> "));
}

#[test]
fn test_ask_blank_uses_default() {
    conio_cmd()
        .args(["ask", "Name", "--default", "D"])
        .write_stdin("   \n")
        .assert()
        .success()
        .stdout("D\n")
        .stderr(predicate::str::contains("Name (default: D):\n> "));
}

#[test]
fn test_ask_closed_input_exits_1() {
    conio_cmd()
        .args(["ask", "Name", "--default", "D"])
        .write_stdin("")
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn test_ask_json_outcomes() {
    conio_cmd()
        .args(["ask", "Name", "--json"])
        .write_stdin("Ada\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""outcome":"given""#))
        .stdout(predicate::str::contains(r#""answer":"Ada""#));

    conio_cmd()
        .args(["ask", "Name", "--json"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""outcome":"defaulted""#))
        .stdout(predicate::str::contains(r#""answer":null"#));

    conio_cmd()
        .args(["ask", "Name", "--json"])
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(r#""outcome":"end_of_input""#));
}

// ============================================================================
// confirm
// ============================================================================

#[test]
fn test_confirm_yes_and_no() {
    conio_cmd()
        .args(["confirm", "Continue?"])
        .write_stdin("Yes\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Continue? (y/n) (default: y):\n> "));

    conio_cmd()
        .args(["confirm", "Continue?"])
        .write_stdin("No\n")
        .assert()
        .code(1);
}

#[test]
fn test_confirm_closed_input_uses_default() {
    conio_cmd()
        .args(["confirm", "Continue?"])
        .write_stdin("")
        .assert()
        .success();

    conio_cmd()
        .args(["confirm", "Continue?", "--default", "no"])
        .write_stdin("")
        .assert()
        .code(1);
}

// ============================================================================
// choose
// ============================================================================

#[test]
fn test_choose_valid_number() {
    conio_cmd()
        .args(["choose", "Pick", "A", "B", "C", "--default", "2"])
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout("B\n")
        .stderr(predicate::str::contains("  [2] B (default)\n"));
}

#[test]
fn test_choose_reprompts_after_out_of_range() {
    conio_cmd()
        .args(["choose", "Pick", "A", "B", "C", "--default", "2"])
        .write_stdin("9\n1\n")
        .assert()
        .success()
        .stdout("A\n")
        .stderr(predicate::str::contains(
            " ERROR: Please enter a number between 1 and 3",
        ));
}

#[test]
fn test_choose_closed_input() {
    conio_cmd()
        .args(["choose", "Pick", "A", "B", "C", "--default", "2"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("B\n");

    conio_cmd()
        .args(["choose", "Pick", "A", "B", "C"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("A\n");
}

#[test]
fn test_choose_invalid_default() {
    conio_cmd()
        .args(["choose", "Pick", "A", "B", "C", "--default", "5"])
        .write_stdin("1\n")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Default choice must be between 1 and 3"))
        .stderr(predicate::str::contains("[1] A").not());
}

#[test]
fn test_choose_json() {
    conio_cmd()
        .args(["choose", "Pick", "red", "blue", "--json"])
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout("{\"choice\":\"blue\"}\n");
}

#[test]
fn test_choose_requires_choices() {
    conio_cmd().args(["choose", "Pick"]).assert().failure();
}
