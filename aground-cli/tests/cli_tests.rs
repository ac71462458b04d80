//! CLI integration tests for the aground binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn aground() -> Command {
    Command::cargo_bin("aground").expect("binary builds")
}

#[test]
fn extract_json_has_wire_shape() {
    aground()
        .args([
            "extract",
            "-t",
            "The ferry struck rocks near the harbor.",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"event_type\": \"collision\""))
        .stdout(predicate::str::contains("\"trigger_words\""))
        .stdout(predicate::str::contains("\"arguments\""))
        .stdout(predicate::str::contains("\"trigger_positions\"").not());
}

#[test]
fn positions_flag_adds_offsets() {
    aground()
        .args([
            "extract",
            "-t",
            "The ship ran aground.",
            "--format",
            "json",
            "--positions",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"trigger_positions\""));
}

#[test]
fn bare_text_behaves_as_extract() {
    aground()
        .arg("The ship ran aground.")
        .assert()
        .success()
        .stdout(predicate::str::contains("grounding"));
}

#[test]
fn extract_reads_stdin() {
    aground()
        .arg("extract")
        .write_stdin("The tanker beached itself near the coast.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("stranding"));
}

#[test]
fn empty_stdin_is_an_error() {
    aground()
        .arg("extract")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input text"));
}

#[test]
fn repl_terminates_on_quit_words() {
    for quit in ["quit", "EXIT", "q"] {
        aground()
            .arg("repl")
            .write_stdin(format!("{quit}\n"))
            .assert()
            .success();
    }
}

#[test]
fn repl_extracts_then_quits() {
    aground()
        .arg("repl")
        .write_stdin("The ferry struck rocks.\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("collision"));
}

#[test]
fn repl_skips_blank_lines() {
    aground()
        .arg("repl")
        .write_stdin("\n   \nquit\n")
        .assert()
        .success();
}

#[test]
fn demo_runs_all_samples() {
    aground()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("example 1 of 4"))
        .stdout(predicate::str::contains("example 4 of 4"))
        .stdout(predicate::str::contains("grounding"));
}

#[test]
fn info_lists_lexicon_and_analyzer() {
    aground()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("heuristic"))
        .stdout(predicate::str::contains("triggers"));
}

#[test]
fn pattern_matcher_mode_is_selectable() {
    aground()
        .args([
            "extract",
            "-t",
            "Coast Guard crews reported an oil spill after the vessel grounded.",
            "-m",
            "pattern",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("oil spill"));
}
