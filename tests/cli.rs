use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

// Nothing listens on the discard port, so every request is refused
// immediately: a reliable stand-in for "offline".
const UNREACHABLE_API: &str = "http://127.0.0.1:9";

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("portfolio-cards").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("HTTPS_PROXY")
        .env_remove("https_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy")
        .env("NO_PROXY", "127.0.0.1");
    cmd
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("build"))
        .stdout(contains("list"));
}

#[test]
fn unknown_sort_mode_is_a_usage_error() {
    cmd()
        .args(["list", "--sort", "random"])
        .assert()
        .failure()
        .stderr(contains("random"));
}

#[test]
fn blank_account_is_a_config_error() {
    cmd()
        .args(["list", "--account", "  "])
        .assert()
        .code(2)
        .stderr(contains("account name must not be empty"));
}

#[test]
fn broken_config_file_is_a_config_error() {
    let tmp = TempDir::new().expect("create temp dir");
    let path = tmp.path().join("portfolio.toml");
    fs::write(&path, "account = [not toml").expect("write config");

    cmd()
        .arg("list")
        .arg("--config")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(contains("invalid config file"));
}

#[test]
fn offline_build_writes_page_with_failure_status() {
    let tmp = TempDir::new().expect("create temp dir");
    let out = tmp.path().join("index.html");

    cmd()
        .args(["build", "--api-base", UNREACHABLE_API, "--account", "someone", "--curated", "A", "--curated", "B"])
        .arg("--output")
        .arg(&out)
        .assert()
        .code(1)
        .stderr(contains("Couldn’t load repositories right now."));

    let html = fs::read_to_string(&out).expect("page written");
    assert!(html.contains(r#"<p id="projectsState" class="state">Couldn’t load repositories right now.</p>"#));
    assert!(!html.contains("<article"));
    // Profile fetch failed too, so the defaults are used
    assert!(html.contains("https://github.com/someone.png"));
}

#[test]
fn offline_list_json_is_empty() {
    let tmp = TempDir::new().expect("create temp dir");
    let config = tmp.path().join("portfolio.toml");
    fs::write(
        &config,
        format!("account = \"someone\"\nscope = \"account\"\napi_base = \"{UNREACHABLE_API}\"\n"),
    )
    .expect("write config");

    cmd()
        .args(["list", "--json", "--config"])
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("[]"));
}
