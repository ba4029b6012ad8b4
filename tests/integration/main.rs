//! Integration tests for the rsdef CLI
//!
//! These tests run the binary against temporary project directories,
//! exercising the full cycle of: init → validate → inspect → check → docs


use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper function to create an rsdef command with colors disabled
fn rsdef() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("rsdef"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Helper to write an observations file
fn write_observations(dir: &std::path::Path, json: &str) -> std::path::PathBuf {
    let path = dir.join("observations.json");
    fs::write(&path, json).unwrap();
    path
}

// =============================================================================
// BASIC COMMAND TESTS
// =============================================================================

#[test]
fn test_version() {
    rsdef()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_json() {
    rsdef()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_help() {
    rsdef()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Validate and document hypermedia REST resource definitions"));
}

#[test]
fn test_no_command_prints_hint() {
    let temp = TempDir::new().unwrap();
    rsdef()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("rsdef --help"));
}

// =============================================================================
// BUILT-IN CATALOG TESTS
// =============================================================================

#[test]
fn test_validate_builtin_catalog() {
    let temp = TempDir::new().unwrap();
    rsdef()
        .arg("validate")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Validating 2 resource(s)"))
        .stdout(predicate::str::contains("No violations found."));
}

#[test]
fn test_validate_closed_world_fails_on_builtin_catalog() {
    let temp = TempDir::new().unwrap();
    rsdef()
        .args(["validate", "--closed-world"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("[unresolved_subresource]"))
        .stderr(predicate::str::contains("11 violation(s) found"));
}

#[test]
fn test_list_json() {
    let temp = TempDir::new().unwrap();
    let output = rsdef()
        .args(["--json", "list"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["resources"][0]["name"], "Person");
    assert_eq!(json["resources"][1]["name"], "Search");
    assert_eq!(json["resources"][0]["transitions"], 10);
}

#[test]
fn test_show_person() {
    let temp = TempDir::new().unwrap();
    rsdef()
        .args(["show", "Person"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("spouse-relationships"))
        .stdout(predicate::str::contains("Upon a successful read."));
}

#[test]
fn test_show_unknown_resource() {
    let temp = TempDir::new().unwrap();
    rsdef()
        .args(["show", "Place"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown resource: Place"));
}

#[test]
fn test_outcomes_person_get() {
    let temp = TempDir::new().unwrap();
    rsdef()
        .args(["outcomes", "Person", "get"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("GET Person"))
        .stdout(predicate::str::contains("301"))
        .stdout(predicate::str::contains("410"));
}

#[test]
fn test_outcomes_search_lists_warning() {
    let temp = TempDir::new().unwrap();
    rsdef()
        .args(["outcomes", "Search", "GET"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("299"))
        .stdout(predicate::str::contains("(warning)"));
}

#[test]
fn test_outcomes_invalid_method() {
    let temp = TempDir::new().unwrap();
    rsdef()
        .args(["outcomes", "Person", "FETCH"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid method"));
}

#[test]
fn test_resolve_transition_json() {
    let temp = TempDir::new().unwrap();
    let output = rsdef()
        .args(["--json", "resolve", "Person", "relationship"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["conditional"], false);
    assert_eq!(json["scope"][0], "Relationship");
}

#[test]
fn test_resolve_unknown_relation() {
    let temp = TempDir::new().unwrap();
    rsdef()
        .args(["resolve", "Person", "sibling-relationships"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown relation"));
}

// =============================================================================
// CONTRACT CHECK TESTS
// =============================================================================

#[test]
fn test_check_conforming_observations() {
    let temp = TempDir::new().unwrap();
    let path = write_observations(
        temp.path(),
        r#"[
            {"resource": "Person", "method": "GET", "status": 200,
             "links": ["self", "relationship"], "elements": ["Person", "Relationship"]},
            {"resource": "Search", "method": "GET", "status": 299}
        ]"#,
    );

    rsdef()
        .arg("check")
        .arg(&path)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("WARN GET Search -> 299"))
        .stdout(predicate::str::contains("All observations conform"));
}

#[test]
fn test_check_violating_observations() {
    let temp = TempDir::new().unwrap();
    let path = write_observations(
        temp.path(),
        r#"[{"resource": "Person", "method": "GET", "status": 500, "links": ["edit"]}]"#,
    );

    rsdef()
        .arg("check")
        .arg(&path)
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("status 500 is not a declared outcome"))
        .stdout(predicate::str::contains("link 'edit' is not a declared transition"))
        .stderr(predicate::str::contains("contract violated"));
}

#[test]
fn test_check_malformed_observations() {
    let temp = TempDir::new().unwrap();
    let path = write_observations(temp.path(), "{ not json");

    rsdef()
        .arg("check")
        .arg(&path)
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid observations"));
}

// =============================================================================
// DOCS AND EXPORT TESTS
// =============================================================================

#[test]
fn test_docs_to_stdout() {
    let temp = TempDir::new().unwrap();
    rsdef()
        .arg("docs")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# API Resources"))
        .stdout(predicate::str::contains("## Search"));
}

#[test]
fn test_docs_to_file() {
    let temp = TempDir::new().unwrap();
    rsdef()
        .args(["docs", "--out", "API.md"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote API.md"));

    let markdown = fs::read_to_string(temp.path().join("API.md")).unwrap();
    assert!(markdown.contains("### State: Person (`person`)"));
}

#[test]
fn test_export_toml() {
    let temp = TempDir::new().unwrap();
    rsdef()
        .arg("export")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[[resource]]"))
        .stdout(predicate::str::contains("name = \"Person\""));
}

#[test]
fn test_export_json() {
    let temp = TempDir::new().unwrap();
    let output = rsdef()
        .args(["--json", "export"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["resource"][1]["name"], "Search");
}
