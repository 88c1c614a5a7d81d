//! End-to-end tests for the deporder binary

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_manifest(dir: &TempDir, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn prints_space_joined_install_order() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(
        &dir,
        "dependencies.json",
        r#"{"a": ["b", "c"], "b": ["c", "d"], "c": ["d"], "d": []}"#,
    );

    cargo_bin_cmd!("deporder")
        .arg(&manifest)
        .env_remove("DEPORDER_RESOLVE_MODE")
        .assert()
        .code(0)
        .stdout("d c b a\n");
}

#[test]
fn reads_toml_manifests() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(
        &dir,
        "dependencies.toml",
        "a = [\"b\"]\nb = [\"c\"]\nc = []\n",
    );

    cargo_bin_cmd!("deporder")
        .arg(&manifest)
        .env_remove("DEPORDER_RESOLVE_MODE")
        .assert()
        .code(0)
        .stdout("c b a\n");
}

#[test]
fn usage_error_without_manifest_argument() {
    cargo_bin_cmd!("deporder")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn cycle_exits_nonzero_with_diagnostic() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(
        &dir,
        "dependencies.json",
        r#"{"a": ["b"], "b": ["c"], "c": ["a"]}"#,
    );

    cargo_bin_cmd!("deporder")
        .arg(&manifest)
        .env_remove("DEPORDER_RESOLVE_MODE")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cycle detected"))
        .stderr(predicate::str::contains("a -> b -> c"));
}

#[test]
fn unknown_dependency_fails_by_default() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "dependencies.json", r#"{"app": ["libc"]}"#);

    cargo_bin_cmd!("deporder")
        .arg(&manifest)
        .env_remove("DEPORDER_RESOLVE_MODE")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown dependency `libc`"));
}

#[test]
fn assume_installed_flag_skips_unknown_dependencies() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(
        &dir,
        "dependencies.json",
        r#"{"app": ["libc", "lib"], "lib": ["libc"]}"#,
    );

    cargo_bin_cmd!("deporder")
        .arg(&manifest)
        .arg("--assume-installed")
        .assert()
        .code(0)
        .stdout("lib app\n");
}

#[test]
fn resolve_mode_is_read_from_the_environment() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "dependencies.json", r#"{"app": ["libc"]}"#);

    cargo_bin_cmd!("deporder")
        .arg(&manifest)
        .env("DEPORDER_RESOLVE_MODE", "assume-installed")
        .assert()
        .code(0)
        .stdout("app\n");
}

#[test]
fn missing_manifest_file_exits_nonzero() {
    let dir = TempDir::new().unwrap();

    cargo_bin_cmd!("deporder")
        .arg(dir.path().join("dependencies.json"))
        .env_remove("DEPORDER_RESOLVE_MODE")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}
