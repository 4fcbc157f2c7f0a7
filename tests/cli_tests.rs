//! CLI interface tests
//!
//! Tests basic CLI functionality like --help, --version flags and the
//! commands that need no query history

use predicates::prelude::*;

mod common;
use common::{fixtures, get_bin};

#[test]
fn test_cli_help_flag_displays_usage_information() {
    get_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("warehouse sizing advisor"))
        .stdout(predicate::str::contains("recommend"));
}

#[test]
fn test_cli_version_flag_displays_version_number() {
    get_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("snowwiz"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_without_command_prints_command_list() {
    let project = fixtures::empty_project().unwrap();
    get_bin()
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: snowwiz <COMMAND>"))
        .stdout(predicate::str::contains("samples"));
}

#[test]
fn test_unknown_subcommand_fails() {
    get_bin().arg("resize").assert().failure();
}

#[test]
fn test_recommend_requires_ids() {
    get_bin()
        .arg("recommend")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<IDS>"));
}

#[test]
fn test_samples_lists_builtin_ids() {
    let project = fixtures::empty_project().unwrap();
    get_bin()
        .arg("samples")
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Built-in sample queries"))
        .stdout(predicate::str::contains("test_abc12345"))
        .stdout(predicate::str::contains("test_gld11223"))
        .stdout(predicate::str::contains("135.00 min"));
}

#[test]
fn test_completions_bash_generates_script() {
    get_bin()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("_snowwiz"))
        .stdout(predicate::str::contains("recommend"));
}

#[test]
fn test_completions_rejects_unknown_shell() {
    get_bin()
        .arg("completions")
        .arg("tcsh")
        .assert()
        .failure();
}

#[test]
fn test_missing_explicit_config_reports_not_found() {
    let project = fixtures::empty_project().unwrap();
    get_bin()
        .arg("--config")
        .arg("missing.toml")
        .arg("recommend")
        .arg("test_abc12345")
        .current_dir(project.path())
        .assert()
        .code(66)
        .stderr(predicate::str::contains("Configuration file not found"))
        .stderr(predicate::str::contains("snowwiz init"));
}

#[test]
fn test_invalid_config_reports_config_error() {
    let project = fixtures::empty_project().unwrap();
    fixtures::write_config(project.path(), "[report]\nformat = \"html\"\n").unwrap();

    get_bin()
        .arg("recommend")
        .arg("test_abc12345")
        .current_dir(project.path())
        .assert()
        .code(78)
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_no_emoji_flag_uses_ascii_in_utf8_locale() {
    let project = fixtures::empty_project().unwrap();
    assert_cmd::Command::new(env!("CARGO_BIN_EXE_snowwiz"))
        .env_remove("NO_EMOJI")
        .env_remove("RUST_LOG")
        .env("LANG", "en_US.UTF-8")
        .args(["--no-emoji", "recommend", "test_abc12345"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Analyzing 1 query"))
        .stdout(predicate::str::contains(">> Analyzing"))
        .stdout(predicate::str::contains("📊").not())
        .stdout(predicate::str::contains("🔍").not())
        .stdout(predicate::str::contains("💡").not());
}

#[test]
fn test_no_emoji_env_var_uses_ascii() {
    let project = fixtures::empty_project().unwrap();
    assert_cmd::Command::new(env!("CARGO_BIN_EXE_snowwiz"))
        .env("NO_EMOJI", "1")
        .env("LANG", "en_US.UTF-8")
        .arg("samples")
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("~ "))
        .stdout(predicate::str::contains("📊").not());
}
