//! Command-line behaviour of the dua-catalog binary

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("dua-catalog").expect("binary builds");
    cmd.env_remove("DUA_CATALOG_PATH");
    cmd
}

fn write_catalog(dir: &tempfile::TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, json).expect("write catalog");
    path
}

const INVALID_CATALOG: &str = r#"{
    "version": "1.0.0",
    "categories": [
        {"id": "A", "nameNative": "A", "nameSecondary": "A", "icon": "",
         "entries": [{"id": "dup-1", "primaryScript": "s", "translationNative": "n", "translationSecondary": "t"}]},
        {"id": "B", "nameNative": "B", "nameSecondary": "B", "icon": "",
         "entries": [{"id": "dup-1", "primaryScript": "s", "translationNative": "n", "translationSecondary": "t"}]},
        {"id": "C", "nameNative": "C", "nameSecondary": "C", "icon": "", "entries": []}
    ]
}"#;

#[test]
fn test_list_embedded_categories() {
    cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Supplication Catalog"))
        .stdout(predicate::str::contains("morning"))
        .stdout(predicate::str::contains("forgiveness"));
}

#[test]
fn test_list_json_is_parseable() {
    let output = cmd().args(["list", "--format", "json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let first = &value.as_array().unwrap()[0];
    assert_eq!(first["id"], "morning");
    assert!(first["entryCount"].as_u64().unwrap() > 0);
}

#[test]
fn test_show_category() {
    cmd()
        .args(["show", "evening"])
        .assert()
        .success()
        .stdout(predicate::str::contains("evening-1"))
        .stdout(predicate::str::contains("evening-2"));
}

#[test]
fn test_entry_lookup_json() {
    let output = cmd()
        .args(["entry", "quranic-2", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["categoryId"], "quranic");
    assert_eq!(value["entry"]["id"], "quranic-2");
}

#[test]
fn test_unknown_entry_fails_with_message() {
    cmd()
        .args(["entry", "nonexistent-id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry 'nonexistent-id' not found"));
}

#[test]
fn test_search_by_field() {
    cmd()
        .args(["search", "FORGIVE", "--field", "translation-secondary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("forgiveness-1"))
        .stdout(predicate::str::contains("forgiveness-2"));
}

#[test]
fn test_search_blank_query_has_no_results() {
    cmd()
        .args(["search", " "])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 result(s)"));
}

#[test]
fn test_search_unknown_category_fails() {
    cmd()
        .args(["search", "allah", "--category", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category 'nope' not found"));
}

#[test]
fn test_validate_embedded_catalog() {
    cmd()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog is valid"));
}

#[test]
fn test_validate_reports_all_violations() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(&dir, INVALID_CATALOG);

    cmd()
        .arg("--catalog")
        .arg(&path)
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("2 violation(s)"))
        .stdout(predicate::str::contains("duplicate entry id 'dup-1'"))
        .stdout(predicate::str::contains("category 'C' (#2) has no entries"));
}

#[test]
fn test_validate_json_lists_violation_kinds() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(&dir, INVALID_CATALOG);

    let output = cmd()
        .arg("--catalog")
        .arg(&path)
        .args(["validate", "--format", "json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["valid"], false);
    let kinds: Vec<_> = value["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["kind"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(kinds, vec!["duplicate_entry_id", "empty_category"]);
}

#[test]
fn test_queries_refuse_invalid_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(&dir, INVALID_CATALOG);

    cmd()
        .arg("--catalog")
        .arg(&path)
        .args(["entry", "dup-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Catalog failed validation"));
}

#[test]
fn test_tsv_cells_never_split_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(
        &dir,
        r#"{
            "version": "1.0.0",
            "categories": [
                {"id": "tab\tcat", "nameNative": "A", "nameSecondary": "A", "icon": "two\tparts",
                 "entries": [{"id": "tab\tentry", "primaryScript": "s", "translationNative": "n", "translationSecondary": "t"}]}
            ]
        }"#,
    );

    let list = cmd()
        .arg("--catalog")
        .arg(&path)
        .args(["list", "--format", "tsv"])
        .output()
        .unwrap();
    assert!(list.status.success());
    for line in String::from_utf8(list.stdout).unwrap().lines() {
        assert_eq!(line.split('\t').count(), 5, "{line}");
    }

    let show = cmd()
        .arg("--catalog")
        .arg(&path)
        .args(["show", "tab\tcat", "--format", "tsv"])
        .output()
        .unwrap();
    assert!(show.status.success());
    for line in String::from_utf8(show.stdout).unwrap().lines() {
        assert_eq!(line.split('\t').count(), 7, "{line}");
    }
}

#[test]
fn test_catalog_path_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(&dir, INVALID_CATALOG);

    cmd()
        .env("DUA_CATALOG_PATH", &path)
        .arg("validate")
        .assert()
        .failure();
}

#[test]
fn test_export_writes_loadable_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("export.json");

    cmd()
        .arg("export")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported"));

    cmd()
        .arg("--catalog")
        .arg(&output)
        .args(["entry", "morning-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Upon waking up"));
}
