//! Common test utilities for Skal end-to-end tests.
//!
//! This module provides shared helpers used across all e2e test files.

// Each test file is compiled as a separate crate, so not all functions
// are used in every test file. This is expected behavior.
#![allow(dead_code)]

use std::fs;
use std::process::Command;

use tempfile::tempdir;

/// Captured output of one interpreter invocation.
pub struct SkalOutput {
    /// Everything written to standard output.
    pub stdout: String,
    /// Everything written to standard error.
    pub stderr: String,
    /// The process exit code.
    pub code: Option<i32>,
}

/// Returns the path to the skal binary built by cargo.
pub fn skal_binary() -> String {
    env!("CARGO_BIN_EXE_skal").to_string()
}

/// Writes `source` to a temp file and runs `skal <command>` on it.
pub fn run_skal(command: &str, source: &str) -> SkalOutput {
    let temp = tempdir().expect("failed to create temp dir");
    let source_path = temp.path().join("program.skal");
    fs::write(&source_path, source).expect("failed to write source file");

    let output = Command::new(skal_binary())
        .arg(command)
        .arg(&source_path)
        .output()
        .expect("failed to run skal");

    SkalOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        code: output.status.code(),
    }
}

/// Runs `skal run` on `source` and asserts a clean exit.
pub fn run_ok(source: &str) -> String {
    let output = run_skal("run", source);
    assert_eq!(
        output.code,
        Some(0),
        "expected exit 0, got {:?}; stderr: {}",
        output.code,
        output.stderr
    );
    output.stdout
}
