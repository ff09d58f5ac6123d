//! Integration tests for the zork CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const STORY: &str = "\
1 | The Cellar | You wake in a cellar.
1-1 | Open the door | You enter a dark room.
1-1-1 | Flee | You trip on the stairs. YOU LOSE
1-1-2 | Explore | You find the exit. YOU WIN
1-2 | Sleep | Nothing happens.";

/// Create a temp directory holding a small story file.
fn test_story() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("story.txt");
    fs::write(&path, STORY).unwrap();
    (dir, path)
}

fn zork() -> Command {
    Command::cargo_bin("zork").unwrap()
}

// ---------------------------------------------------------------------------
// new
// ---------------------------------------------------------------------------

#[test]
fn new_creates_story_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fresh.txt");
    zork()
        .arg("new")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created story"));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "1 | root | Hello, welcome to Zork!"
    );
}

#[test]
fn new_fails_if_file_exists() {
    let (_dir, path) = test_story();
    zork()
        .arg("new")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_reports_shape() {
    let (_dir, path) = test_story();
    zork()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("All checks passed")
                .and(predicate::str::contains("5 nodes, 3 leaves"))
                .and(predicate::str::contains("1 win, 1 lose, 1 dead end")),
        );
}

#[test]
fn check_reports_malformed_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "1 | root | hi\nonly | two\n").unwrap();

    zork()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn check_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    zork()
        .arg("check")
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load"));
}

// ---------------------------------------------------------------------------
// show / stats
// ---------------------------------------------------------------------------

#[test]
fn show_lists_every_node() {
    let (_dir, path) = test_story();
    zork()
        .arg("show")
        .arg(&path)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1-1-2")
                .and(predicate::str::contains("Explore"))
                .and(predicate::str::contains("5 nodes")),
        );
}

#[test]
fn show_marks_dead_ends() {
    let (_dir, path) = test_story();
    zork()
        .arg("show")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("dead end").and(predicate::str::contains("—").not()));
}

#[test]
fn stats_from_root() {
    let (_dir, path) = test_story();
    zork()
        .arg("stats")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Probability of a win: 20.00%"));
}

#[test]
fn stats_from_position() {
    let (_dir, path) = test_story();
    zork()
        .args(["stats", "--from", "1-1", "--precision", "1"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Probability of a win: 33.3%"));
}

#[test]
fn stats_from_missing_position_fails() {
    let (_dir, path) = test_story();
    zork()
        .args(["stats", "--from", "1-3"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no node at position 1-3"));
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_json_to_stdout() {
    let (_dir, path) = test_story();
    let output = zork()
        .arg("export")
        .arg(&path)
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["root"]["option"], "The Cellar");
    assert_eq!(value["root"]["children"][0]["position"], "1-1");
    assert_eq!(value["stats"]["nodes"], 5);
}

#[test]
fn export_markdown_to_file() {
    let (dir, path) = test_story();
    let out = dir.path().join("story.md");
    zork()
        .arg("export")
        .arg(&path)
        .arg("markdown")
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let md = fs::read_to_string(&out).unwrap();
    assert!(md.starts_with("# The Cellar"));
    assert!(md.contains("  - **Explore** `1-1-2`: You find the exit. YOU WIN *(win)*"));
}

#[test]
fn export_unknown_format_fails() {
    let (_dir, path) = test_story();
    zork()
        .arg("export")
        .arg(&path)
        .arg("yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_to_a_win() {
    let (_dir, path) = test_story();
    zork()
        .arg("play")
        .arg(&path)
        .write_stdin("c\n1\n2\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Probability of a win at this point: 20.00%")
                .and(predicate::str::contains("You find the exit. YOU WIN"))
                .and(predicate::str::contains("Thanks for playing.")),
        );
}

#[test]
fn play_reports_missing_choice() {
    let (_dir, path) = test_story();
    zork()
        .arg("play")
        .arg(&path)
        .write_stdin("3\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("no node at position 1-3"));
}

// ---------------------------------------------------------------------------
// edit
// ---------------------------------------------------------------------------

#[test]
fn edit_saves_on_quit() {
    let (_dir, path) = test_story();
    zork()
        .arg("edit")
        .arg(&path)
        .write_stdin("s 2\na Wake up | YOU WIN\nr\no The Damp Cellar\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to"));

    let saved = fs::read_to_string(&path).unwrap();
    assert!(saved.starts_with("1 | The Damp Cellar | You wake in a cellar."));
    assert!(saved.ends_with("1-2 | Sleep | Nothing happens.\n1-2-1 | Wake up | YOU WIN"));
}

#[test]
fn edit_no_save_leaves_file_untouched() {
    let (_dir, path) = test_story();
    zork()
        .args(["edit", "--no-save"])
        .arg(&path)
        .write_stdin("d 1\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Changes discarded."));

    assert_eq!(fs::read_to_string(&path).unwrap(), STORY);
}

#[test]
fn edit_quits_on_command_word() {
    let (_dir, path) = test_story();
    zork()
        .arg("edit")
        .arg(&path)
        .write_stdin("o The Damp Cellar\nquit now\nv\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Exiting editor.")
                .and(predicate::str::contains("Saved to"))
                .and(predicate::str::contains("Position: 1").not()),
        );

    let saved = fs::read_to_string(&path).unwrap();
    assert!(saved.starts_with("1 | The Damp Cellar |"));
}
