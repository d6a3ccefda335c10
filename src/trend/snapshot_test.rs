use super::*;
use std::fs;

fn paths(snapshot: &Snapshot) -> Vec<&str> {
    snapshot.iter().map(|(path, _)| path).collect()
}

#[test]
fn parse_object_keeps_file_order() {
    let json = r#"{
        "zeta/baseline.neon": {"overallErrors": 3},
        "alpha/baseline.neon": {"overallErrors": 1},
        "mid/baseline.neon": {"overallErrors": 2}
    }"#;
    let snapshot = parse_snapshot(json).unwrap();
    assert_eq!(
        paths(&snapshot),
        ["zeta/baseline.neon", "alpha/baseline.neon", "mid/baseline.neon"]
    );
    assert_eq!(snapshot.get("alpha/baseline.neon").unwrap().overall_errors, 1);
}

#[test]
fn parse_list_concatenates_entries() {
    let json = r#"[
        {"b.neon": {"deprecations": 4}},
        {"a.neon": {"deprecations": 2}}
    ]"#;
    let snapshot = parse_snapshot(json).unwrap();
    assert_eq!(paths(&snapshot), ["b.neon", "a.neon"]);
    assert_eq!(snapshot.get("b.neon").unwrap().deprecations, 4);
}

#[test]
fn repeated_path_replaces_record_in_place() {
    let json = r#"[
        {"a.neon": {"overallErrors": 1}},
        {"b.neon": {"overallErrors": 2}},
        {"a.neon": {"overallErrors": 9}}
    ]"#;
    let snapshot = parse_snapshot(json).unwrap();
    assert_eq!(paths(&snapshot), ["a.neon", "b.neon"]);
    assert_eq!(snapshot.get("a.neon").unwrap().overall_errors, 9);
    assert_eq!(snapshot.len(), 2);
}

#[test]
fn parse_empty_object() {
    let snapshot = parse_snapshot("{}").unwrap();
    assert_eq!(snapshot.len(), 0);
    assert!(snapshot.get("anything").is_none());
}

#[test]
fn parse_rejects_scalar_document() {
    let err = parse_snapshot("42").unwrap_err();
    assert!(err.to_string().contains("integer `42`"), "{err}");
    assert!(err.to_string().contains("expected an object or a list"), "{err}");
}

#[test]
fn parse_rejects_non_object_list_item() {
    let err = parse_snapshot(r#"[{"a.neon": {}}, "oops"]"#).unwrap_err();
    assert!(err.to_string().contains("string \"oops\""), "{err}");
    assert_eq!(err.line(), 1);
    assert!(err.column() > 0);
}

#[test]
fn parse_error_points_at_bad_counter() {
    let json = "{\n  \"a.neon\": {\"overallErrors\": 1},\n  \"b.neon\": {\"overallErrors\": \"many\"}\n}";
    let err = parse_snapshot(json).unwrap_err();
    assert!(err.to_string().contains("expected u64"), "{err}");
    assert_eq!(err.line(), 3);
    assert!(err.column() > 0);
}

#[test]
fn duplicate_key_in_object_keeps_first_position() {
    let json = r#"{"a.neon": {"overallErrors": 1}, "b.neon": {}, "a.neon": {"overallErrors": 4}}"#;
    let snapshot = parse_snapshot(json).unwrap();
    assert_eq!(paths(&snapshot), ["a.neon", "b.neon"]);
    assert_eq!(snapshot.get("a.neon").unwrap().overall_errors, 4);
}

#[test]
fn parse_rejects_invalid_json() {
    assert!(parse_snapshot("{not json").is_err());
}

#[test]
fn read_snapshot_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("result.json");
    fs::write(&file, r#"{"src/baseline.neon": {"unknownTypes": 5}}"#).unwrap();

    let snapshot = read_snapshot(&file).unwrap();
    assert_eq!(snapshot.get("src/baseline.neon").unwrap().unknown_types, 5);
}

#[test]
fn read_snapshot_missing_file_is_file_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("missing.json");

    let err = read_snapshot(&file).unwrap_err();
    assert!(matches!(err, TrendError::FileRead { .. }), "{err:?}");
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn read_snapshot_invalid_content_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("broken.json");
    fs::write(&file, "not json at all").unwrap();

    let err = read_snapshot(&file).unwrap_err();
    assert!(matches!(err, TrendError::Parse { .. }), "{err:?}");
}
