//! Integration tests for packdir-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn packdir_cmd() -> Command {
    cargo_bin_cmd!("packdir")
}

fn member_names(archive: &Path) -> Vec<String> {
    let file = fs::File::open(archive).expect("archive should exist");
    let zip = zip::ZipArchive::new(file).expect("archive should be a valid ZIP");
    let mut names: Vec<String> = zip.file_names().map(ToString::to_string).collect();
    names.sort();
    names
}

#[test]
fn test_version_flag() {
    packdir_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("packdir"));
}

#[test]
fn test_help_flag() {
    packdir_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: packdir"));
}

#[test]
fn test_rejects_arguments() {
    let temp = TempDir::new().expect("failed to create temp dir");

    packdir_cmd()
        .current_dir(temp.path())
        .arg("somewhere.zip")
        .assert()
        .failure();

    assert!(!temp.path().join("projeto.zip").exists());
}

#[test]
fn test_archives_current_directory() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let root = temp.path();
    fs::create_dir_all(root.join("src")).unwrap();
    fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
    fs::write(root.join("src/a.py"), "x").unwrap();
    fs::write(root.join("node_modules/pkg/index.js"), "js").unwrap();
    fs::write(root.join("app.log"), "log").unwrap();
    fs::write(root.join(".env"), "TOKEN=1").unwrap();
    fs::write(root.join("README.md"), "readme").unwrap();

    packdir_cmd()
        .current_dir(root)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        member_names(&root.join("projeto.zip")),
        vec!["README.md", "src/a.py"]
    );
}

#[test]
fn test_rerun_does_not_archive_itself() {
    let temp = TempDir::new().expect("failed to create temp dir");
    fs::write(temp.path().join("main.c"), "int main(void) { return 0; }").unwrap();

    packdir_cmd().current_dir(temp.path()).assert().success();
    packdir_cmd().current_dir(temp.path()).assert().success();

    assert_eq!(member_names(&temp.path().join("projeto.zip")), vec!["main.c"]);
}

#[test]
fn test_empty_directory() {
    let temp = TempDir::new().expect("failed to create temp dir");

    packdir_cmd().current_dir(temp.path()).assert().success();

    assert!(member_names(&temp.path().join("projeto.zip")).is_empty());
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    let temp = TempDir::new().expect("failed to create temp dir");
    fs::write(temp.path().join("kept.txt"), "kept").unwrap();

    packdir_cmd()
        .current_dir(temp.path())
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("archive created"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_entry_fails() {
    let temp = TempDir::new().expect("failed to create temp dir");
    std::os::unix::fs::symlink(temp.path().join("missing"), temp.path().join("broken")).unwrap();

    packdir_cmd()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("projeto.zip"));
}
