//! CLI and basic command tests

mod common;

use common::{setup_sample_store, setup_store, tix};
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    tix()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tickets"));
}

#[test]
fn test_version_displays() {
    tix()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tix"));
}

#[test]
fn test_unknown_command_fails() {
    tix()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_completions_generate() {
    tix()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tickets"));
}

// ============================================================================
// Tabbed Output Tests
// ============================================================================

#[test]
fn test_list_tabbed_all_repositories() {
    let (_tmp, store) = setup_sample_store();

    tix()
        .arg("--store")
        .arg(&store)
        .args(["tickets", "list", "--tabbed"])
        .assert()
        .success()
        .stdout("alpha\t3\tFix crash\tOpen\t2023-05-01\nbeta\t1\tAdd docs\tNew\t2023-02-14\n");
}

#[test]
fn test_list_tabbed_for_repository() {
    let (_tmp, store) = setup_sample_store();

    tix()
        .arg("--store")
        .arg(&store)
        .args(["tickets", "ls", "-t", "beta"])
        .assert()
        .success()
        .stdout("beta\t1\tAdd docs\tNew\t2023-02-14\n");
}

#[test]
fn test_list_tabbed_verbose_is_identical() {
    let (_tmp, store) = setup_sample_store();

    let quiet = tix()
        .arg("--store")
        .arg(&store)
        .args(["tickets", "ls", "-t"])
        .output()
        .unwrap();
    let verbose = tix()
        .arg("--store")
        .arg(&store)
        .args(["tickets", "ls", "-t", "-v"])
        .output()
        .unwrap();

    assert!(quiet.status.success());
    assert_eq!(quiet.stdout, verbose.stdout);
}

#[test]
fn test_store_from_environment() {
    let (_tmp, store) = setup_sample_store();

    tix()
        .env("TIX_STORE", &store)
        .args(["tickets", "ls", "-t", "alpha"])
        .assert()
        .success()
        .stdout("alpha\t3\tFix crash\tOpen\t2023-05-01\n");
}

// ============================================================================
// Table Output Tests
// ============================================================================

#[test]
fn test_list_table_all_repositories() {
    let (_tmp, store) = setup_sample_store();

    tix()
        .arg("--store")
        .arg(&store)
        .args(["tickets", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Repository"))
        .stdout(predicate::str::contains("Last Modified"))
        .stdout(predicate::str::contains("Fix crash"))
        .stdout(predicate::str::contains("2023-05-01"))
        .stdout(predicate::str::contains("Shipped feature").not());
}

#[test]
fn test_list_table_for_repository_omits_repository_column() {
    let (_tmp, store) = setup_sample_store();

    tix()
        .arg("--store")
        .arg(&store)
        .args(["tickets", "list", "--verbose", "alpha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fix crash"))
        .stdout(predicate::str::contains("Repository").not())
        .stdout(predicate::str::contains("Add docs").not());
}

#[test]
fn test_list_table_empty_store() {
    let (_tmp, store) = setup_store("repositories: []\ntickets: []\n");

    tix()
        .arg("--store")
        .arg(&store)
        .args(["tickets", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Repository"))
        .stdout(predicate::str::contains("ID"));
}

#[test]
fn test_repository_lookup_ignores_case() {
    let (_tmp, store) = setup_sample_store();

    tix()
        .arg("--store")
        .arg(&store)
        .args(["tickets", "ls", "-t", "ALPHA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fix crash"));
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_unknown_repository_fails() {
    let (_tmp, store) = setup_sample_store();

    tix()
        .arg("--store")
        .arg(&store)
        .args(["tickets", "list", "gamma"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("gamma not found!"));
}

#[test]
fn test_missing_store_fails() {
    let tmp = TempDir::new().unwrap();

    tix()
        .arg("--store")
        .arg(tmp.path().join("missing.yaml"))
        .args(["tickets", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ticket store not found"));
}

#[test]
fn test_invalid_store_fails() {
    let (_tmp, store) = setup_store("tickets: [ {");

    tix()
        .arg("--store")
        .arg(&store)
        .args(["tickets", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn test_list_rejects_extra_arguments() {
    let (_tmp, store) = setup_sample_store();

    tix()
        .arg("--store")
        .arg(&store)
        .args(["tickets", "list", "alpha", "beta"])
        .assert()
        .failure();
}

// ============================================================================
// Shell Tests
// ============================================================================

#[test]
fn test_shell_runs_commands_from_stdin() {
    let (tmp, store) = setup_sample_store();

    tix()
        .env("HOME", tmp.path())
        .env("XDG_DATA_HOME", tmp.path())
        .arg("--store")
        .arg(&store)
        .arg("shell")
        .write_stdin("tickets ls -t beta\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("beta\t1\tAdd docs\tNew\t2023-02-14"));
}

#[test]
fn test_shell_reports_unknown_repository_and_continues() {
    let (tmp, store) = setup_sample_store();

    tix()
        .env("HOME", tmp.path())
        .env("XDG_DATA_HOME", tmp.path())
        .arg("--store")
        .arg(&store)
        .arg("shell")
        .write_stdin("tickets ls gamma\ntickets ls -t beta\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("gamma not found!"))
        .stdout(predicate::str::contains("Add docs"));
}

#[test]
fn test_shell_strips_quotes_from_arguments() {
    let (tmp, store) = setup_sample_store();

    tix()
        .env("HOME", tmp.path())
        .env("XDG_DATA_HOME", tmp.path())
        .arg("--store")
        .arg(&store)
        .arg("shell")
        .write_stdin("tickets ls -t \"beta\"\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("beta\t1\tAdd docs\tNew\t2023-02-14"))
        .stderr(predicate::str::contains("not found").not());
}
