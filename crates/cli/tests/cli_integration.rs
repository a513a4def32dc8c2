//! CLI integration tests for every subcommand.
//!
//! Uses `assert_cmd` to spawn the `gbln` binary and verify
//! exit codes, stdout content, and stderr content.
//!
//! Each test works inside its own temporary directory.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const USER_JSON: &str = r#"{"user": {"id": 12345, "name": "Alice", "age": 25, "active": true}}"#;
const USER_COMPACT: &str = "{user{id<u16>(12345)name<s64>(Alice)age<u8>(25)active<b>(t)}}";

/// Helper: create a Command for the `gbln` binary, rooted at `dir`.
fn gbln(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("gbln");
    cmd.current_dir(dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    let dir = TempDir::new().unwrap();
    gbln(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GBLN interchange toolchain"));
}

#[test]
fn version_exits_0() {
    let dir = TempDir::new().unwrap();
    gbln(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gbln"));
}

// ──────────────────────────────────────────────
// 2. validate
// ──────────────────────────────────────────────

#[test]
fn validate_accepts_well_formed_file() {
    let dir = TempDir::new().unwrap();
    write(&dir, "user.gbln", USER_COMPACT);
    gbln(&dir)
        .args(["validate", "user.gbln"])
        .assert()
        .success()
        .stdout("valid\n");
}

#[test]
fn validate_rejects_out_of_range_payload() {
    let dir = TempDir::new().unwrap();
    write(&dir, "bad.gbln", "{age<u8>(256)}");
    gbln(&dir)
        .args(["validate", "bad.gbln"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("bad.gbln"))
        .stderr(predicate::str::contains("parse error"));
}

#[test]
fn validate_json_output_reports_kind() {
    let dir = TempDir::new().unwrap();
    gbln(&dir)
        .args(["--output", "json", "validate", "missing.gbln"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(r#""kind":"io""#));
}

#[test]
fn quiet_suppresses_error_text() {
    let dir = TempDir::new().unwrap();
    gbln(&dir)
        .args(["--quiet", "validate", "missing.gbln"])
        .assert()
        .failure()
        .stderr("");
}

// ──────────────────────────────────────────────
// 3. from-json / to-json
// ──────────────────────────────────────────────

#[test]
fn from_json_with_io_preset_writes_compact_text() {
    let dir = TempDir::new().unwrap();
    write(&dir, "user.json", USER_JSON);
    gbln(&dir)
        .args(["from-json", "user.json", "user.gbln"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote user.gbln"));
    assert_eq!(
        fs::read_to_string(dir.path().join("user.gbln")).unwrap(),
        USER_COMPACT
    );
}

#[test]
fn from_json_source_preset_is_indented() {
    let dir = TempDir::new().unwrap();
    write(&dir, "user.json", r#"{"n": -1}"#);
    gbln(&dir)
        .args(["from-json", "user.json", "user.gbln", "--preset", "source"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(dir.path().join("user.gbln")).unwrap(),
        "{\n  n<i8>(-1)\n}\n"
    );
}

#[test]
fn from_json_profile_file_overlays_preset() {
    let dir = TempDir::new().unwrap();
    write(&dir, "user.json", r#"{"n": 1}"#);
    write(&dir, "profile.toml", "preset = \"source\"\nindent = 4\n");
    gbln(&dir)
        .args([
            "from-json",
            "user.json",
            "user.gbln",
            "--profile-file",
            "profile.toml",
        ])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(dir.path().join("user.gbln")).unwrap(),
        "{\n    n<u8>(1)\n}\n"
    );
}

#[test]
fn from_json_rejects_invalid_profile() {
    let dir = TempDir::new().unwrap();
    write(&dir, "user.json", r#"{"n": 1}"#);
    write(&dir, "profile.toml", "indent = 9\n");
    gbln(&dir)
        .args([
            "from-json",
            "user.json",
            "user.gbln",
            "--profile-file",
            "profile.toml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("indent 9"));
    assert!(!dir.path().join("user.gbln").exists());
}

#[test]
fn from_json_reports_oversized_string() {
    let dir = TempDir::new().unwrap();
    write(&dir, "big.json", &format!(r#"{{"bio": "{}"}}"#, "x".repeat(1025)));
    gbln(&dir)
        .args(["from-json", "big.json", "big.gbln"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1025 characters"))
        .stderr(predicate::str::contains("$.bio"));
}

#[test]
fn compressed_round_trip_through_cli() {
    let dir = TempDir::new().unwrap();
    write(&dir, "user.json", USER_JSON);
    gbln(&dir)
        .args(["from-json", "user.json", "data.gbln.xz"])
        .assert()
        .success();
    let raw = fs::read(dir.path().join("data.gbln.xz")).unwrap();
    assert!(!raw.starts_with(b"{"));

    gbln(&dir)
        .args(["validate", "data.gbln.xz"])
        .assert()
        .success();
    gbln(&dir)
        .args(["to-json", "data.gbln.xz", "back.json"])
        .assert()
        .success();
    let back: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("back.json")).unwrap()).unwrap();
    let original: serde_json::Value = serde_json::from_str(USER_JSON).unwrap();
    assert_eq!(back, original);
}

#[test]
fn to_json_pretty() {
    let dir = TempDir::new().unwrap();
    write(&dir, "flag.gbln", "{on<b>(t)}");
    gbln(&dir)
        .args(["to-json", "flag.gbln", "flag.json", "--pretty"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(dir.path().join("flag.json")).unwrap(),
        "{\n  \"on\": true\n}\n"
    );
}

// ──────────────────────────────────────────────
// 4. fmt
// ──────────────────────────────────────────────

#[test]
fn fmt_pretty_to_stdout_keeps_declared_types() {
    let dir = TempDir::new().unwrap();
    write(&dir, "wide.gbln", ":| comment\n{n<u64>(1)}");
    gbln(&dir)
        .args(["fmt", "wide.gbln"])
        .assert()
        .success()
        .stdout("{\n  n<u64>(1)\n}\n");
}

#[test]
fn fmt_compact_to_file() {
    let dir = TempDir::new().unwrap();
    write(&dir, "user.gbln", "{\n  a<i16>(-300)\n  b[]\n}\n");
    gbln(&dir)
        .args(["fmt", "user.gbln", "--compact", "--out", "out.gbln"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(dir.path().join("out.gbln")).unwrap(),
        "{a<i16>(-300)b[]}"
    );
}

#[test]
fn fmt_rejects_indent_out_of_range() {
    let dir = TempDir::new().unwrap();
    write(&dir, "user.gbln", USER_COMPACT);
    gbln(&dir)
        .args(["fmt", "user.gbln", "--indent", "9"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("indent 9"));
}

// ──────────────────────────────────────────────
// 5. compare / roundtrip
// ──────────────────────────────────────────────

#[test]
fn compare_json_output() {
    let dir = TempDir::new().unwrap();
    write(&dir, "user.json", r#"{"name":"Alice","age":25,"active":true}"#);
    let out = gbln(&dir)
        .args(["--output", "json", "compare", "user.json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["json_bytes"], 39);
    assert_eq!(report["compact_bytes"], 41);
    assert!(report["savings_percent"].is_f64());
}

#[test]
fn compare_text_output() {
    let dir = TempDir::new().unwrap();
    write(&dir, "user.json", USER_JSON);
    gbln(&dir)
        .args(["compare", "user.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("savings:"));
}

#[test]
fn roundtrip_ok() {
    let dir = TempDir::new().unwrap();
    write(&dir, "user.json", USER_JSON);
    gbln(&dir)
        .args(["roundtrip", "user.json"])
        .assert()
        .success()
        .stdout("round trip ok\n");
}

#[test]
fn roundtrip_reports_empty_object_policy() {
    let dir = TempDir::new().unwrap();
    write(&dir, "empty.json", r#"{"meta": {}}"#);
    gbln(&dir)
        .args(["roundtrip", "empty.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("round trip changed the value"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    write(&dir, "broken.json", "{\"a\": ");
    gbln(&dir)
        .args(["--output", "json", "roundtrip", "broken.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(r#""kind":"parse""#));
}
