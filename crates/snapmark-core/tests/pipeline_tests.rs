//! Pipeline Tests
//!
//! This test suite verifies the full in-memory pipeline: parse both
//! snapshots, detect changes, render the annotated JSONC.
//!
//! ## Scenarios Covered
//!
//! 1. Changed leaf produces an annotated output line
//! 2. Identical snapshots produce an empty change set
//! 3. Windows-path item keys survive rendering
//! 4. Comment-stripped output re-parses to the current snapshot
//! 5. Change summary matches the detected change count

use snapmark_core::diff::render_change_summary;
use snapmark_core::{detect_changes, parse_snapshot_bytes, render_annotated};

#[test]
fn test_changed_leaf_is_annotated_end_to_end() {
    // GIVEN a backup and a current snapshot differing in one leaf
    let backup = br#"{"F1": {"img1.png": {"name": "Alice", "age": 30}}}"#;
    let current = br#"{"F1": {"img1.png": {"name": "Bob", "age": 30}}}"#;

    let old = parse_snapshot_bytes(backup).unwrap();
    let new = parse_snapshot_bytes(current).unwrap();

    // WHEN we run the pipeline
    let changes = detect_changes(&old, &new);
    let rendered = render_annotated(&new, &changes).unwrap();

    // THEN the changed field carries the prior value and the last field
    // keeps no trailing comma
    assert_eq!(changes.len(), 1);
    assert!(rendered.contains("\"name\": \"Bob\", // original: \"Alice\""));
    assert!(rendered.contains("\"age\": 30\n"));
}

#[test]
fn test_identical_snapshots_produce_no_changes() {
    let bytes = br#"{"F1": {"img1.png": {"name": "Alice"}}}"#;
    let old = parse_snapshot_bytes(bytes).unwrap();
    let new = parse_snapshot_bytes(bytes).unwrap();

    let changes = detect_changes(&old, &new);

    assert!(changes.is_empty());
    assert_eq!(render_change_summary(&changes), "No changes detected.");
}

#[test]
fn test_windows_path_item_keys_round_trip() {
    // GIVEN item identifiers containing literal backslashes
    let backup = br#"{"F1": {"C:\\forms\\1.png": {"name": "Alice"}}}"#;
    let current = br#"{"F1": {"C:\\forms\\1.png": {"name": "Bob"}}}"#;

    let old = parse_snapshot_bytes(backup).unwrap();
    let new = parse_snapshot_bytes(current).unwrap();

    let changes = detect_changes(&old, &new);
    let rendered = render_annotated(&new, &changes).unwrap();

    // THEN the emitted key doubles every backslash
    assert!(rendered.contains(r#""C:\\forms\\1.png": {"#));
    assert!(rendered.contains("// original: \"Alice\""));
}

#[test]
fn test_stripped_output_reparses_to_current_snapshot() {
    let backup = br#"{"F1": {"a.png": {"x": 1, "y": [1, 2]}, "b.png": {"z": null}}}"#;
    let current = br#"{"F1": {"a.png": {"x": 2, "y": [1, 2]}, "b.png": {"z": null}}}"#;

    let old = parse_snapshot_bytes(backup).unwrap();
    let new = parse_snapshot_bytes(current).unwrap();

    let rendered = render_annotated(&new, &detect_changes(&old, &new)).unwrap();
    let skeleton: String = rendered
        .lines()
        .map(|line| match line.find(" // original: ") {
            Some(idx) => &line[..idx],
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n");

    let reparsed = parse_snapshot_bytes(skeleton.as_bytes()).unwrap();
    assert_eq!(reparsed, new);
}

#[test]
fn test_summary_counts_match_detected_changes() {
    let backup = br#"{"F1": {"img1.png": {"name": "Alice", "age": 30}}}"#;
    let current = br#"{"F1": {"img1.png": {"name": "Bob", "age": 31}}}"#;

    let old = parse_snapshot_bytes(backup).unwrap();
    let new = parse_snapshot_bytes(current).unwrap();

    let changes = detect_changes(&old, &new);
    let summary = render_change_summary(&changes);

    assert_eq!(changes.len(), 2);
    assert!(summary.starts_with("2 changed fields:"));
    assert!(summary.contains("F1/img1.png/name"));
    assert!(summary.contains("F1/img1.png/age"));
}
