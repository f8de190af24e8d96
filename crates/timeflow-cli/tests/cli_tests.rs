use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a Command with --no-color flag and a private
/// database
fn tf_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tf").expect("Failed to find tf binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// Runs a create-style command and returns the ID printed on its first line
fn created_id(db_path: &Path, args: &[&str]) -> String {
    let output = tf_cmd(db_path).args(args).assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).expect("stdout should be UTF-8");
    stdout
        .lines()
        .next()
        .and_then(|line| line.split("ID: ").nth(1))
        .map(|id| id.split_whitespace().next().unwrap_or_default().to_string())
        .expect("output should start with the created ID")
}

fn test_db() -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("cli_test.db");
    (temp_dir, db_path)
}

#[test]
fn test_cli_empty_feed() {
    let (_temp_dir, db_path) = test_db();

    tf_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Actions"))
        .stdout(predicate::str::contains("No active actions."));
}

#[test]
fn test_cli_add_and_list_actions() {
    let (_temp_dir, db_path) = test_db();

    tf_cmd(&db_path)
        .args(["action", "add", "Call Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created action with ID:"))
        .stdout(predicate::str::contains("### Call Bob (○ Active)"));
    tf_cmd(&db_path)
        .args(["action", "add", "Pay rent", "--at", "2999-01-01T09:00"])
        .assert()
        .success();
    tf_cmd(&db_path)
        .args(["action", "add", "Buy milk", "--start"])
        .assert()
        .success();

    let output = tf_cmd(&db_path).args(["action", "list"]).assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    let rent = stdout.find("### Pay rent").unwrap();
    let milk = stdout.find("### Buy milk").unwrap();
    let bob = stdout.find("### Call Bob").unwrap();
    assert!(rent < milk && milk < bob, "unexpected order:\n{stdout}");

    tf_cmd(&db_path)
        .args(["action", "list", "--search", "MILK"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("Call Bob").not());
}

#[test]
fn test_cli_complete_scheduled_action_logs_event() {
    let (_temp_dir, db_path) = test_db();
    let id = created_id(&db_path, &["action", "add", "Dentist", "--at", "2999-01-01T09:00:00Z"]);

    tf_cmd(&db_path)
        .args(["action", "complete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: active → completed"));
    tf_cmd(&db_path)
        .args(["action", "complete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("already in that status"));

    tf_cmd(&db_path)
        .args(["event", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Action completed: Dentist (action-completed)").count(1));
    tf_cmd(&db_path)
        .args(["action", "list", "--archived"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Dentist (✓ Completed)"));
}

#[test]
fn test_cli_overdue_action_flagged_on_startup() {
    let (_temp_dir, db_path) = test_db();
    tf_cmd(&db_path)
        .args(["action", "add", "Pay rent", "--at", "2000-01-01T09:00:00Z"])
        .assert()
        .success();

    tf_cmd(&db_path)
        .args(["event", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Action overdue: Pay rent").count(1));
}

#[test]
fn test_cli_delete_requires_confirmation() {
    let (_temp_dir, db_path) = test_db();
    let id = created_id(&db_path, &["action", "add", "Buy milk"]);

    tf_cmd(&db_path)
        .args(["action", "delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("confirmation"));

    tf_cmd(&db_path)
        .args(["action", "delete", &id, "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted action 'Buy milk'"));
}

#[test]
fn test_cli_confirm_delete_setting() {
    let (_temp_dir, db_path) = test_db();
    let id = created_id(&db_path, &["event", "add", "Met Ann"]);

    tf_cmd(&db_path)
        .args(["settings", "confirm-delete", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Deletion confirmation turned off"));
    tf_cmd(&db_path)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Confirm delete: off"))
        .stdout(predicate::str::contains("- Theme: light"));

    tf_cmd(&db_path)
        .args(["event", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted event 'Met Ann'"));
}

#[test]
fn test_cli_comments() {
    let (_temp_dir, db_path) = test_db();
    let event_id = created_id(&db_path, &["event", "add", "Met Ann", "--at", "2024-03-10T12:00"]);

    let comment_id = created_id(&db_path, &["comment", "add", &event_id, "Coffee at noon"]);
    tf_cmd(&db_path)
        .args(["event", "show", &event_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("#### Comments"))
        .stdout(predicate::str::contains("- Coffee at noon ("));

    tf_cmd(&db_path)
        .args(["comment", "delete", &event_id, &comment_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted comment 'Coffee at noon'"));
    tf_cmd(&db_path)
        .args(["comment", "delete", &event_id, &comment_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_invalid_datetime() {
    let (_temp_dir, db_path) = test_db();

    tf_cmd(&db_path)
        .args(["action", "add", "Pay rent", "--at", "tomorrow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tomorrow"));
}

#[test]
fn test_cli_show_unknown_action() {
    let (_temp_dir, db_path) = test_db();

    tf_cmd(&db_path)
        .args(["action", "show", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Action with ID missing not found"));
}
