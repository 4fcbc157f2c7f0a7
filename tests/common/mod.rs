//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Locating the snowwiz binary
//! - Test fixture creation utilities
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures;
//!
//! fn test_history_file() {
//!     let project = fixtures::project_with_history(fixtures::MIXED_HISTORY).unwrap();
//!     common::get_bin().arg("recommend").arg("qlong0001").current_dir(project.path());
//! }
//! ```

pub mod fixtures;

use assert_cmd::Command;

/// Helper to get the snowwiz binary command
#[allow(dead_code)]
pub fn get_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_snowwiz"));
    cmd.env("NO_EMOJI", "1").env_remove("RUST_LOG");
    cmd
}

/// Parse command stdout as JSON, failing the test with the raw text otherwise
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    let stdout = String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8");
    serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("stdout should be valid JSON ({}), got: {}", e, stdout))
}
