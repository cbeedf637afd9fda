#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;
use yare::parameterized;

fn parse(content: &str) -> Result<ResultFile, ResultError> {
    ResultFile::parse(Path::new("bfs-result.json"), content)
}

#[test]
fn test_parse_single_record() {
    let file = parse(r#"{"run1": {"pass": 10, "fail": 2}}"#).unwrap();
    assert_eq!(file.path(), Path::new("bfs-result.json"));
    assert_eq!(file.record().label, "run1");
    assert_eq!(file.record().pass, 10);
    assert_eq!(file.record().fail, 2);
}

#[test]
fn test_first_key_in_source_order_wins() {
    // "a-run" sorts before "z-run" but appears second.
    let file = parse(
        r#"{
            "z-run": {"pass": 5, "fail": 1},
            "a-run": {"pass": 99, "fail": 0}
        }"#,
    )
    .unwrap();
    assert_eq!(file.record().label, "z-run");
    assert_eq!(file.record().pass, 5);
}

#[test]
fn test_trailing_siblings_are_not_validated() {
    let file = parse(r#"{"run1": {"pass": 1, "fail": 0}, "junk": [null, "x", {"pass": "?"}]}"#)
        .unwrap();
    assert_eq!(file.record().pass, 1);
}

#[test]
fn test_repeated_first_key_takes_last_value() {
    let file = parse(
        r#"{"run1": {"pass": 1, "fail": 1}, "other": {}, "run1": {"pass": 7, "fail": 3}}"#,
    )
    .unwrap();
    assert_eq!(file.record().label, "run1");
    assert_eq!(file.record().pass, 7);
    assert_eq!(file.record().fail, 3);
}

#[test]
fn test_realistic_bfs_summary() {
    let file = parse(
        r#"{
  "Mon, 19 Oct 2026 08:00:00 +0000": {
    "sha": "4f6c1a2",
    "total": "314",
    "pass": "270",
    "skip": "9",
    "fail": "35"
  }
}"#,
    )
    .unwrap();
    let record = file.into_record();
    assert_eq!(record.label, "Mon, 19 Oct 2026 08:00:00 +0000");
    assert_eq!(record.pass, 270);
    assert_eq!(record.fail, 35);
    assert_eq!(record.total, Some(314));
}

#[test]
fn test_empty_object() {
    assert!(matches!(parse("{}"), Err(ResultError::Empty { .. })));
}

#[parameterized(
    truncated = { r#"{"run1": {"pass": 10"# },
    not_json = { "pass=10 fail=2" },
    empty = { "" },
    array_root = { r#"[{"pass": 1, "fail": 0}]"# },
    null_root = { "null" },
    trailing_garbage = { r#"{"run1": {"pass": 1, "fail": 0}} extra"# },
)]
fn parse_errors(content: &str) {
    assert!(matches!(parse(content), Err(ResultError::Parse { .. })));
}

#[test]
fn test_parse_error_names_path() {
    let err = parse("{").unwrap_err();
    assert!(
        err.to_string()
            .starts_with("failed to parse result file 'bfs-result.json'"),
        "unexpected message: {}",
        err
    );
}

#[test]
fn test_load_from_disk() {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(br#"{"run1": {"pass": "3", "fail": "4"}}"#)
        .unwrap();
    tmp.flush().unwrap();

    let file = ResultFile::load(tmp.path()).unwrap();
    assert_eq!(file.path(), tmp.path());
    assert_eq!(file.record().pass, 3);
    assert_eq!(file.record().fail, 4);
}

#[test]
fn test_load_non_utf8_file() {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(b"{\"run1\": {\"pass\": \xff\xfe}}").unwrap();
    tmp.flush().unwrap();

    let err = ResultFile::load(tmp.path()).unwrap_err();
    assert!(matches!(err, ResultError::Encoding { .. }), "got {:?}", err);
    assert!(err.to_string().contains("is not valid UTF-8"));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latest-bfs-result.json");
    match ResultFile::load(&path) {
        Err(ResultError::MissingFile { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected missing file error, got {:?}", other),
    }
}
