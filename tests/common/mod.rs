//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Store with two repositories and a mix of open and closed tickets
pub const SAMPLE_STORE: &str = r#"
repositories:
  - name: alpha
    id: 1
  - name: beta
    id: 2
tickets:
  - repository: alpha
    number: 3
    title: Fix crash
    status: Open
    created: 2023-04-28T09:00:00Z
    updated: 2023-05-01T12:00:00Z
  - repository: alpha
    number: 4
    title: Shipped feature
    status: Merged
    created: 2023-03-01T09:00:00Z
  - repository: beta
    number: 1
    title: Add docs
    status: New
    created: 2023-02-14T10:30:00Z
"#;

/// Helper to get a tix command with a clean environment
pub fn tix() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("tix"));
    cmd.env_remove("TIX_STORE").env_remove("TIX_LOG");
    cmd
}

/// Helper to write a store file into a temp directory
pub fn setup_store(content: &str) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tickets.yaml");
    std::fs::write(&path, content).unwrap();
    (tmp, path)
}

/// Helper to write the sample store
pub fn setup_sample_store() -> (TempDir, PathBuf) {
    setup_store(SAMPLE_STORE)
}
