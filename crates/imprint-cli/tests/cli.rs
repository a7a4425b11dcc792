//! Binary-level tests for the `imprint` command.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn project(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for (name, content) in files {
        let path = temp.path().join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    temp
}

fn imprint(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("imprint").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn tree_prints_the_map() {
    let temp = project(&[
        ("vars.less", "@w: 1px;"),
        ("site.less", "@import (css) url('vars.less');"),
    ]);

    imprint(temp.path())
        .args(["--quiet", "tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("┬ vars.less\n└── site.less"));
}

#[test]
fn changed_json_output() {
    let temp = project(&[
        ("_colors.scss", "$c: red;"),
        ("main.scss", "@import 'colors';"),
    ]);

    imprint(temp.path())
        .args(["-q", "changed", "_colors.scss", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""file": "_colors.scss""#))
        .stdout(predicate::str::contains(r#""main.scss""#));
}

#[test]
fn changed_log_dependents_reports_on_stderr() {
    let temp = project(&[
        ("_colors.scss", "$c: red;"),
        ("main.scss", "@import 'colors';"),
    ]);

    imprint(temp.path())
        .args(["changed", "_colors.scss", "--log-dependents"])
        .assert()
        .success()
        .stdout("_colors.scss\n  main.scss\n")
        .stderr(predicate::str::contains("rebuilding dependent"))
        .stderr(predicate::str::contains("main.scss"));
}

#[test]
fn changed_without_log_dependents_stays_quiet_about_rebuilds() {
    let temp = project(&[
        ("_colors.scss", "$c: red;"),
        ("main.scss", "@import 'colors';"),
    ]);

    imprint(temp.path())
        .args(["changed", "_colors.scss"])
        .assert()
        .success()
        .stderr(predicate::str::contains("rebuilding dependent").not());
}

#[test]
fn dependents_of_leaf_file() {
    let temp = project(&[("a.pcss", "")]);

    imprint(temp.path())
        .args(["dependents", "a.pcss"])
        .assert()
        .success()
        .stdout("─ a.pcss (no dependents)\n");
}

#[test]
fn invalid_override_fails_with_hint() {
    let temp = project(&[("imprint.toml", "[parsers]\n\".styl\" = true\n")]);

    imprint(temp.path())
        .arg("tree")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid parser override"));
}

#[test]
fn missing_explicit_config_fails() {
    let temp = project(&[]);

    imprint(temp.path())
        .args(["--config", "missing.toml", "tree"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn changed_requires_files() {
    Command::cargo_bin("imprint")
        .unwrap()
        .arg("changed")
        .assert()
        .failure();
}
