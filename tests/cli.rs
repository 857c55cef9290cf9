use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use stickyboard::config::BoardConfig;
use stickyboard::gateway::GatewayLatency;
use tempfile::TempDir;

fn board_home() -> TempDir {
    let home = tempfile::tempdir().unwrap();
    let config = BoardConfig {
        latency: GatewayLatency::zero(),
        color_seed: Some(1),
        ..BoardConfig::default()
    };
    config.save(home.path()).unwrap();
    home
}

fn stickyboard(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stickyboard").unwrap();
    cmd.env("STICKYBOARD_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("STICKYBOARD_LOG");
    cmd
}

#[test]
fn test_new_then_list() {
    let home = board_home();

    stickyboard(home.path())
        .args(["new", "buy milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created n1"));

    stickyboard(home.path())
        .arg("new")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created n2"));

    stickyboard(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("buy milk"))
        .stdout(predicate::str::contains("3x4 @ 3,0"))
        .stdout(predicate::str::contains("2 on the board, 0 in the trash"));
}

#[test]
fn test_delete_restore_roundtrip() {
    let home = board_home();
    stickyboard(home.path()).args(["new", "keep me"]).assert().success();

    stickyboard(home.path())
        .args(["delete", "n1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved n1 to the trash"));

    stickyboard(home.path())
        .arg("trash")
        .assert()
        .success()
        .stdout(predicate::str::contains("keep me"));

    stickyboard(home.path())
        .args(["restore", "n1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored n1"));

    stickyboard(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 on the board, 0 in the trash"));
}

#[test]
fn test_skipped_ids_are_warnings() {
    let home = board_home();

    stickyboard(home.path())
        .args(["restore", "n9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("n9 is not in the trash"));
}

#[test]
fn test_clear_and_empty_trash() {
    let home = board_home();
    for text in ["a", "b", "c"] {
        stickyboard(home.path()).args(["new", text]).assert().success();
    }

    stickyboard(home.path())
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved 3 notes to the trash"));

    stickyboard(home.path())
        .args(["empty-trash", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Permanently removed 3 notes"));

    stickyboard(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("The board is empty."));

    // ids are derived from the notes on disk
    stickyboard(home.path())
        .arg("new")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created n1"));
}

#[test]
fn test_clear_asks_for_confirmation() {
    let home = board_home();
    stickyboard(home.path()).args(["new", "x"]).assert().success();

    stickyboard(home.path())
        .arg("clear")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));

    stickyboard(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 on the board"));
}

#[test]
fn test_unknown_color_fails() {
    let home = board_home();
    stickyboard(home.path()).arg("new").assert().success();

    stickyboard(home.path())
        .args(["color", "n1", "chartreuse"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Unknown color: chartreuse"));

    stickyboard(home.path())
        .args(["color", "n1", "sky blue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("n1 is now Sky Blue"));
}

#[test]
fn test_move_clamps_to_grid() {
    let home = board_home();
    stickyboard(home.path()).arg("new").assert().success();

    stickyboard(home.path())
        .args(["move", "n1", "--x", "20", "--y", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("n1 is at 9,2 (3x4)"));

    stickyboard(home.path())
        .args(["move", "n7", "--x", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("n7 is not on the board"));
}

#[test]
fn test_writes_board_files() {
    let home = board_home();
    stickyboard(home.path()).args(["new", "persist"]).assert().success();

    let notes = std::fs::read_to_string(home.path().join("sticky-notes.json")).unwrap();
    assert!(notes.contains("\"zIndex\": 1"));
    assert!(notes.contains("\"isDeleted\": false"));

    let layout = std::fs::read_to_string(home.path().join("sticky-notes-layout.json")).unwrap();
    assert!(layout.contains("\"i\": \"n1\""));
    assert!(layout.contains("\"minW\": 2"));
}

#[test]
fn test_palette_lists_every_color() {
    let home = board_home();

    stickyboard(home.path())
        .arg("palette")
        .assert()
        .success()
        .stdout(predicate::str::contains("Light Yellow"))
        .stdout(predicate::str::contains("#87CEEB"));
}
