//! End-to-end tests for the `plugcheck` binary.
//!
//! Each test points the config directory at a fresh temp dir so the
//! user's real configuration is never read or written.

use assert_cmd::Command;
use predicates::prelude::*;

fn plugcheck(config_dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("plugcheck").unwrap();
    cmd.env("PLUGCHECK_CONFIG_DIR", config_dir.path())
        .env_remove("PLUGCHECK_API_URL")
        .env_remove("PLUGCHECK_AUTH_TOKEN")
        .env_remove("PLUGCHECK_PROBE_TIMEOUT")
        .env_remove("PLUGCHECK_DEBUG");
    cmd
}

#[test]
fn test_should_print_version() {
    let dir = tempfile::tempdir().unwrap();
    plugcheck(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("plugcheck version "));
}

#[test]
fn test_should_describe_probe_on_dry_run() {
    let dir = tempfile::tempdir().unwrap();
    plugcheck(&dir)
        .env("PLUGCHECK_API_URL", "https://example.com/api/")
        .args(["check", "git_integration", "--dry-run"])
        .assert()
        .success()
        .stdout("GIT_INTEGRATION: OPTIONS https://example.com/git/repository/meta/get\n");
}

#[test]
fn test_should_describe_all_probes_on_dry_run() {
    let dir = tempfile::tempdir().unwrap();
    plugcheck(&dir)
        .env("PLUGCHECK_API_URL", "https://example.com/api/")
        .args(["check", "--all", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ANALYTICS: GET https://example.com/analytics/app/kibana",
        ))
        .stdout(predicate::str::contains("REID: no probe"));
}

#[test]
fn test_should_require_plugin_or_all() {
    let dir = tempfile::tempdir().unwrap();
    plugcheck(&dir)
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("specify a plugin or use --all"));
}

#[test]
fn test_should_reject_unknown_plugin() {
    let dir = tempfile::tempdir().unwrap();
    plugcheck(&dir)
        .args(["check", "kibana"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown plugin"));
}

#[test]
fn test_should_exit_nonzero_for_undetectable_plugin() {
    let dir = tempfile::tempdir().unwrap();
    plugcheck(&dir)
        .args(["check", "reid"])
        .assert()
        .code(1)
        .stdout("REID: not supported\n");
}

#[test]
fn test_should_persist_config_between_runs() {
    let dir = tempfile::tempdir().unwrap();
    plugcheck(&dir)
        .args(["config", "set", "probe_timeout", "4"])
        .assert()
        .success();

    plugcheck(&dir)
        .args(["config", "get", "probe_timeout"])
        .assert()
        .success()
        .stdout("4\n");

    assert!(dir.path().join("config.yml").exists());
}

#[test]
fn test_should_reject_invalid_config_value() {
    let dir = tempfile::tempdir().unwrap();
    plugcheck(&dir)
        .args(["config", "set", "probe_timeout", "never"])
        .assert()
        .code(1);
    assert!(!dir.path().join("config.yml").exists());
}

#[test]
fn test_should_reject_json_on_dry_run() {
    let dir = tempfile::tempdir().unwrap();
    plugcheck(&dir)
        .args(["check", "--all", "--json", "--dry-run"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_should_warn_about_api_url_without_api_suffix() {
    let dir = tempfile::tempdir().unwrap();
    plugcheck(&dir)
        .args(["config", "set", "api_url", "https://example.com/api"])
        .assert()
        .success()
        .stderr(predicate::str::contains("does not end with \"/api/\""));
}
