//! Adapter integration tests.
//!
//! Feed real-shaped scanner output through the public adapter registry and
//! check the normalized finding sets.

use secscan_report::adapters::{adapter_for, ToolAdapter};
use secscan_report::model::{FieldValue, ToolKind, NOT_AVAILABLE};
use secscan_report::pipeline::load;
use serde_json::{json, Value};
use std::path::Path;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture(tool: ToolKind) -> Value {
    load(&Path::new(FIXTURES_DIR).join(tool.default_file_name())).expect("fixture loads")
}

#[test]
fn fixture_counts_match_source_arrays() {
    for &tool in ToolKind::all() {
        let json = fixture(tool);
        let expected = match tool {
            ToolKind::Bandit | ToolKind::Semgrep => json["results"].as_array().map(Vec::len),
            ToolKind::Pylint => json.as_array().map(Vec::len),
            ToolKind::Safety => json["vulnerabilities"].as_array().map(Vec::len),
        }
        .expect("fixture has an entry array");

        let set = adapter_for(tool).adapt(&json);
        assert_eq!(set.len(), expected, "{tool}");
        assert_eq!(set.headers.len(), set.columns.len(), "{tool}");
        assert!(set.errors.is_empty(), "{tool}: {:?}", set.errors);
    }
}

#[test]
fn every_row_is_as_wide_as_the_header() {
    for &tool in ToolKind::all() {
        let set = adapter_for(tool).adapt(&fixture(tool));
        for row in set.rows() {
            assert_eq!(row.len(), set.headers.len(), "{tool}");
        }
    }
}

#[test]
fn empty_object_is_empty_result_for_every_tool() {
    for &tool in ToolKind::all() {
        let set = adapter_for(tool).adapt(&json!({}));
        assert_eq!(set.len(), 0, "{tool}");
        assert!(set.errors.is_empty(), "{tool}: {:?}", set.errors);
        assert_eq!(set.tool_name, tool.name());
    }
}

#[test]
fn wrong_shaped_results_record_schema_error() {
    let set = adapter_for(ToolKind::Bandit).adapt(&json!({"results": "oops"}));
    assert!(set.is_empty());
    assert_eq!(
        set.errors,
        vec!["unexpected Bandit report shape: expected 'results' to be an array, found string"]
    );
}

#[test]
fn malformed_entries_are_skipped_in_order() {
    let json = json!({"vulnerabilities": [
        {"package_name": "django", "advisory": "first", "severity": "high"},
        "not an object",
        {"package_name": "flask", "advisory": "second"}
    ]});
    let set = adapter_for(ToolKind::Safety).adapt(&json);

    assert_eq!(set.len(), 2);
    assert_eq!(set.findings[0].message, "first");
    assert_eq!(set.findings[1].message, "second");
    assert_eq!(set.findings[1].severity, NOT_AVAILABLE);
    assert_eq!(set.errors.len(), 1);
    assert!(set.errors[0].starts_with("skipped malformed Safety entry #1"));
}

#[test]
fn semgrep_errors_without_message_become_json_text() {
    let json = json!({
        "results": [],
        "errors": [{"code": 3, "level": "warn"}, "plain text"]
    });
    let set = adapter_for(ToolKind::Semgrep).adapt(&json);
    assert_eq!(set.errors, vec![r#"{"code":3,"level":"warn"}"#, "plain text"]);
}

#[test]
fn numeric_and_missing_values_are_kept_as_given() {
    let json = json!({"results": [
        {"issue_severity": "LOW", "issue_text": "t", "filename": "x.py", "line_number": "17"},
        {"issue_severity": "LOW"}
    ]});
    let set = adapter_for(ToolKind::Bandit).adapt(&json);
    let rows = set.rows();

    // A textual line number stays text; nothing is coerced
    assert_eq!(rows[0][3], FieldValue::text("17"));
    assert_eq!(
        rows[1],
        vec![
            FieldValue::text("LOW"),
            FieldValue::text(""),
            FieldValue::text(NOT_AVAILABLE),
            FieldValue::text(NOT_AVAILABLE),
        ]
    );
}

#[test]
fn adapters_are_usable_as_trait_objects() {
    let adapters: Vec<&dyn ToolAdapter> = ToolKind::all().iter().map(|&t| adapter_for(t)).collect();
    let names: Vec<String> = adapters
        .iter()
        .map(|a| a.empty_set().tool_name)
        .collect();
    assert_eq!(names, vec!["Semgrep", "Bandit", "Pylint", "Safety"]);
}
