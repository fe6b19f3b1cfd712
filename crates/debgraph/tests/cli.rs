//! Binary-level tests: exit status, stdout report, stderr error line

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn debgraph(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("debgraph"));
    cmd.current_dir(dir);
    cmd.env("NO_COLOR", "1");
    for var in [
        "RUST_LOG",
        "DEBGRAPH_CONFIG",
        "DEBGRAPH_LOG_LEVEL",
        "DEBGRAPH_FORMAT",
        "DEBGRAPH_SHOW_LOAD_ORDER",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn write_project(dir: &Path, graph: &str, extra: &str) {
    fs::write(dir.join("graph.txt"), graph).unwrap();
    fs::write(
        dir.join("config.toml"),
        format!(
            "package = \"a\"\nurl_or_path = \"graph.txt\"\ntest_mode = true\nfilter_substring = \"\"\n{extra}"
        ),
    )
    .unwrap();
}

#[test]
fn prints_closure_and_load_order() {
    let dir = TempDir::new().unwrap();
    write_project(dir.path(), "a: b c\nb: \nc: b\n", "show_load_order = true\n");

    debgraph(dir.path())
        .assert()
        .success()
        .stdout(
            "Transitive dependency graph for a:\na -> [b, c]\nb -> []\nc -> [b]\n\n\
             Load order:\n1. b\n2. c\n3. a\n",
        );
}

#[test]
fn show_load_order_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    write_project(dir.path(), "a: b\nb:\n", "");

    debgraph(dir.path())
        .arg("--show-load-order")
        .assert()
        .success()
        .stdout(predicate::str::contains("Load order:\n1. b\n2. a\n"));
}

#[test]
fn json_format_flag() {
    let dir = TempDir::new().unwrap();
    write_project(dir.path(), "a: b\nb:\n", "");

    let output = debgraph(dir.path())
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["root"], "a");
    assert_eq!(json["closure"][0]["dependencies"][0], "b");
}

#[test]
fn explicit_config_path() {
    let dir = TempDir::new().unwrap();
    write_project(dir.path(), "a:\n", "");
    fs::rename(dir.path().join("config.toml"), dir.path().join("other.toml")).unwrap();

    debgraph(dir.path())
        .args(["--config", "other.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a -> []"));
}

#[test]
fn cycle_exits_with_error() {
    let dir = TempDir::new().unwrap();
    write_project(dir.path(), "a: b\nb: a\n", "");

    debgraph(dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error:").and(predicate::str::contains(
            "Dependency cycle detected",
        )));
}

#[test]
fn missing_root_exits_with_error() {
    let dir = TempDir::new().unwrap();
    write_project(dir.path(), "b: c\n", "");

    debgraph(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Root package 'a' not found"));
}

#[test]
fn missing_config_key_exits_with_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "package = \"a\"\n").unwrap();

    debgraph(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing required parameter 'url_or_path'"));
}

#[test]
fn missing_config_file_exits_with_error() {
    let dir = TempDir::new().unwrap();

    debgraph(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config.toml"));
}
