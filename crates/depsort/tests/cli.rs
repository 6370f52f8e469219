//! Black-box tests for the depsort binary
//!
//! Each test writes a manifest into a temp dir and runs the compiled binary
//! from there with a scrubbed environment.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DIAMOND: &str = r#"{
  "packages": [
    { "name": "A", "dependencies": ["B", "C"] },
    { "name": "B", "dependencies": ["D"] },
    { "name": "C", "dependencies": ["D"] },
    { "name": "D" }
  ]
}"#;

const CYCLE: &str = r#"{
  "packages": [
    { "name": "X", "dependencies": ["Y"] },
    { "name": "Y", "dependencies": ["X"] },
    { "name": "Z" }
  ]
}"#;

fn depsort(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("depsort"));
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("DEPSORT_MANIFEST")
        .env_remove("DEPSORT_FORMAT")
        .env_remove("DEPSORT_COLOR")
        .env_remove("DEPSORT_LOG_LEVEL")
        .env_remove("DEPSORT_LOG_FORMAT")
        .env_remove("DEPSORT_LOG_OUTPUT")
        .env("NO_COLOR", "1");
    cmd
}

fn with_manifest(name: &str, content: &str) -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join(name), content).expect("write manifest");
    dir
}

#[test]
fn order_uses_default_manifest() {
    let dir = with_manifest("packages.json", DIAMOND);

    depsort(&dir)
        .args(["order", "A"])
        .assert()
        .success()
        .stdout("D\nB\nC\nA\n");
}

#[test]
fn to_install_prints_missing_packages() {
    let dir = with_manifest("packages.json", DIAMOND);

    depsort(&dir)
        .args(["to-install", "A", "B"])
        .assert()
        .success()
        .stdout("A\nC\n");
}

#[test]
fn manifest_flag_and_toml() {
    let dir = with_manifest(
        "deps.toml",
        "[[packages]]\nname = \"app\"\ndependencies = [\"lib\"]\n",
    );

    depsort(&dir)
        .args(["--manifest", "deps.toml", "order-all"])
        .assert()
        .success()
        .stdout("lib\napp\n");
}

#[test]
fn manifest_from_environment() {
    let dir = with_manifest("deps.json", DIAMOND);

    depsort(&dir)
        .env("DEPSORT_MANIFEST", "deps.json")
        .arg("max-deps")
        .assert()
        .success()
        .stdout("A (3 dependencies)\n");
}

#[test]
fn json_format() {
    let dir = with_manifest("packages.json", DIAMOND);

    depsort(&dir)
        .args(["--format", "json", "order", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""query": "order""#))
        .stdout(predicate::str::contains(r#""D""#));
}

#[test]
fn cycle_exits_with_error() {
    let dir = with_manifest("packages.json", CYCLE);

    depsort(&dir)
        .args(["order", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Circular dependency detected: X -> Y -> X",
        ));

    // Z does not reach the cycle
    depsort(&dir)
        .args(["order", "Z"])
        .assert()
        .success()
        .stdout("Z\n");
}

#[test]
fn unknown_package_exits_with_error() {
    let dir = with_manifest("packages.json", DIAMOND);

    depsort(&dir)
        .args(["order", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Package not found: nope"));
}

#[test]
fn missing_manifest_exits_with_error() {
    let dir = TempDir::new().unwrap();

    depsort(&dir)
        .arg("packages")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Manifest not found"));
}

#[test]
fn version_needs_no_manifest() {
    let dir = TempDir::new().unwrap();

    depsort(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("depsort "));
}

#[test]
fn env_file_supplies_defaults() {
    let dir = with_manifest("other.json", DIAMOND);
    fs::write(dir.path().join(".env"), "DEPSORT_MANIFEST=other.json\n").unwrap();

    depsort(&dir)
        .arg("packages")
        .assert()
        .success()
        .stdout("A\nB\nC\nD\n");
}

#[test]
fn debug_logging_goes_to_stderr() {
    let dir = with_manifest("packages.json", DIAMOND);

    depsort(&dir)
        .args(["--log-level", "3", "order", "A"])
        .assert()
        .success()
        .stdout("D\nB\nC\nA\n")
        .stderr(predicate::str::contains("Logger initialized successfully"))
        .stderr(predicate::str::contains("Loaded manifest"));
}

#[test]
fn default_log_level_is_quiet() {
    let dir = with_manifest("packages.json", DIAMOND);

    depsort(&dir)
        .args(["order", "A"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn rust_log_overrides_log_level() {
    let dir = with_manifest("packages.json", DIAMOND);

    depsort(&dir)
        .env("RUST_LOG", "off")
        .args(["--log-level", "4", "order", "A"])
        .assert()
        .success()
        .stdout("D\nB\nC\nA\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn json_logs_on_stdout() {
    let dir = with_manifest("packages.json", DIAMOND);

    let output = depsort(&dir)
        .args([
            "--log-level",
            "3",
            "--log-format",
            "json",
            "--log-output",
            "stdout",
            "order",
            "A",
        ])
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let (records, results): (Vec<&str>, Vec<&str>) =
        stdout.lines().partition(|line| line.starts_with('{'));

    assert_eq!(results, ["D", "B", "C", "A"]);
    assert!(!records.is_empty());
    for record in &records {
        let value: serde_json::Value = serde_json::from_str(record).unwrap();
        assert!(value.get("level").is_some(), "{}", record);
    }
    assert!(
        records
            .iter()
            .any(|r| r.contains("Logger initialized successfully"))
    );
}
