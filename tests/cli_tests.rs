use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = cargo_bin_cmd!("stageline");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Staged progress tracker for plan generation jobs",
        ))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("stages"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn test_cli_version() {
    let mut cmd = cargo_bin_cmd!("stageline");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stageline"));
}

#[test]
fn test_stages_lists_sequence_in_order() {
    let mut cmd = cargo_bin_cmd!("stageline");
    let assert = cmd.arg("stages").assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let year = stdout.find("year").unwrap();
    let quarters = stdout.find("quarters").unwrap();
    let complete = stdout.find("complete").unwrap();
    assert!(year < quarters && quarters < complete);
}

#[test]
fn test_stages_json_output() {
    let mut cmd = cargo_bin_cmd!("stageline");
    cmd.args(["stages", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"year\""))
        .stdout(predicate::str::contains("\"label\""));
}

#[test]
fn test_show_known_stage() {
    let mut cmd = cargo_bin_cmd!("stageline");
    cmd.args(["show", "--stage", "quarters", "--message", "Drafting Q1-Q4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Breaking it into quarters"))
        .stdout(predicate::str::contains("40%"))
        .stdout(predicate::str::contains("Drafting Q1-Q4"));
}

#[test]
fn test_show_unknown_stage_renders_fallback() {
    let mut cmd = cargo_bin_cmd!("stageline");
    cmd.args(["show", "--stage", "unknown_stage_xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generating..."))
        .stdout(predicate::str::contains("0%"));
}

#[test]
fn test_show_json_frame() {
    let mut cmd = cargo_bin_cmd!("stageline");
    let assert = cmd
        .args(["show", "--stage", "complete", "--output", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let frame: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(frame["stage_id"], "complete");
    assert_eq!(frame["snapshot"]["percent"], 100);
}
