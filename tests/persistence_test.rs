use assert_cmd::cargo_bin;
use std::process::Command;
use tempfile::tempdir;

mod common;

#[test]
fn test_scoreboard_file_accumulates_wins() {
    let dir = tempdir().unwrap();
    let scoreboard = dir.path().join("scores.json");
    let commands = common::commands_file(&common::solve_cat_top()).unwrap();

    // 1. First run: solve once
    let mut cmd1 = Command::new(cargo_bin!("crossword-engine"));
    cmd1.arg(commands.path())
        .arg("--puzzle")
        .arg("tests/fixtures/cat_top.json")
        .arg("--scoreboard")
        .arg(&scoreboard)
        .arg("--player")
        .arg("alice");

    let output1 = cmd1.output().expect("Failed to execute command");
    assert!(output1.status.success());
    let stdout1 = String::from_utf8_lossy(&output1.stdout);
    assert!(stdout1.contains("Solved! alice now has 1 wins"));

    // 2. Second run: same scoreboard file, wins carry over
    let mut cmd2 = Command::new(cargo_bin!("crossword-engine"));
    cmd2.arg(commands.path())
        .arg("--puzzle")
        .arg("tests/fixtures/cat_top.json")
        .arg("--scoreboard")
        .arg(&scoreboard)
        .arg("--player")
        .arg("alice");

    let output2 = cmd2.output().expect("Failed to execute command");
    assert!(output2.status.success());
    let stdout2 = String::from_utf8_lossy(&output2.stdout);
    assert!(stdout2.contains("Solved! alice now has 2 wins"));

    let contents = std::fs::read_to_string(&scoreboard).unwrap();
    assert!(contents.contains("\"alice\": 2"));
}

#[test]
fn test_reset_and_resolve_records_two_wins_in_one_run() {
    let dir = tempdir().unwrap();
    let scoreboard = dir.path().join("scores.json");
    let mut rows = common::solve_cat_top();
    rows.push(["reset", "", "", ""]);
    rows.extend(common::solve_cat_top());
    let commands = common::commands_file(&rows).unwrap();

    let mut cmd = Command::new(cargo_bin!("crossword-engine"));
    cmd.arg(commands.path())
        .arg("--puzzle")
        .arg("tests/fixtures/cat_top.json")
        .arg("--scoreboard")
        .arg(&scoreboard);

    let output = cmd.output().expect("Failed to execute command");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Solved! guest now has 1 wins"));
    assert!(stdout.contains("Solved! guest now has 2 wins"));
}
