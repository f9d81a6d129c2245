//! Integration tests for `provides modules`.
//!
//! These tests drive the binary against temporary site directories with
//! synthetic .dist-info installs.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn cargo_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO"));
    cmd.args(["run", "-p", "provides-cli", "--bin", "provides", "--"]);
    cmd
}

/// Helper to create a metadata directory with a RECORD file.
fn install_package(site: &Path, dist_info_name: &str, record: &str) {
    let dir = site.join(dist_info_name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("RECORD"), record).unwrap();
}

#[test]
fn test_modules_lists_sorted_names() {
    let site = tempdir().unwrap();
    install_package(
        site.path(),
        "mypkg-1.0.dist-info",
        "zeta.py,,\nmypkg/__init__.py,sha256=abc,123\nmypkg-1.0.dist-info/RECORD,,\n",
    );

    let output = cargo_bin()
        .args(["modules", "mypkg", "--path"])
        .arg(site.path())
        .output()
        .expect("Failed to run provides modules");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "mypkg\nzeta\n");
}

#[test]
fn test_modules_json_output() {
    let site = tempdir().unwrap();
    install_package(site.path(), "mypkg-1.0.dist-info", "mypkg/__init__.py,,\n");

    let output = cargo_bin()
        .args(["--json", "modules", "mypkg", "--path"])
        .arg(site.path())
        .output()
        .expect("Failed to run provides modules");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout)
        .unwrap_or_else(|_| panic!("stdout should be valid JSON: {stdout}"));

    assert_eq!(json["schema_version"], 1);
    assert_eq!(json["ok"], true);
    assert_eq!(json["package"], "mypkg");
    assert_eq!(json["modules"], serde_json::json!(["mypkg"]));
}

#[test]
fn test_modules_not_found_fails() {
    let site = tempdir().unwrap();

    let output = cargo_bin()
        .args(["modules", "no-such-package", "--path"])
        .arg(site.path())
        .output()
        .expect("Failed to run provides modules");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no-such-package"),
        "stderr should name the missing package: {stderr}"
    );
}

#[test]
fn test_modules_not_found_json_is_valid() {
    let site = tempdir().unwrap();

    let output = cargo_bin()
        .args(["--json", "modules", "ghost", "--path"])
        .arg(site.path())
        .output()
        .expect("Failed to run provides modules");

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout)
        .unwrap_or_else(|_| panic!("stdout should be valid JSON even on error: {stdout}"));

    assert_eq!(json["ok"], false);
    assert!(json["error"].as_str().unwrap().contains("ghost"));
}

#[test]
fn test_modules_first_path_wins() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    install_package(first.path(), "pkg-1.0.dist-info", "from_first.py,,\n");
    install_package(second.path(), "pkg-2.0.dist-info", "from_second.py,,\n");

    let output = cargo_bin()
        .args(["modules", "pkg", "--path"])
        .arg(first.path())
        .arg("--path")
        .arg(second.path())
        .output()
        .expect("Failed to run provides modules");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "from_first\n");
}

#[test]
fn test_modules_query_is_separator_insensitive() {
    let site = tempdir().unwrap();
    install_package(
        site.path(),
        "my_package-1.0.dist-info",
        "my_package/__init__.py,,\n",
    );

    let output = cargo_bin()
        .args(["modules", "MY.PACKAGE", "--path"])
        .arg(site.path())
        .output()
        .expect("Failed to run provides modules");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "my_package\n");
}

#[test]
fn test_version_prints_version() {
    let output = cargo_bin()
        .arg("version")
        .output()
        .expect("Failed to run provides version");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("provides "));
}
