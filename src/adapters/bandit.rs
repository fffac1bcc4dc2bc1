//! Bandit JSON adapter.
//!
//! Expected shape: `{"results": [{issue_severity, issue_text, filename, line_number}], "errors": [...]}`.

use super::entries::{array_field, decode_entries, diagnostic_text, text_or, text_or_na, value_or_na};
use super::ToolAdapter;
use crate::model::{columns, FieldValue, Finding, FindingSet, SeverityTag, ToolKind};
use serde::Deserialize;
use serde_json::Value;

const HEADERS: &[&str] = &["Issue Severity", "Issue", "File", "Line"];
const COLUMNS: &[&str] = &[columns::SEVERITY, columns::MESSAGE, columns::FILE, columns::LINE];

/// One entry of Bandit's `results` array.
///
/// Defaults: `N/A` for severity, file and line; empty issue text.
#[derive(Debug, Deserialize)]
struct BanditResult {
    issue_severity: Option<FieldValue>,
    issue_text: Option<FieldValue>,
    filename: Option<FieldValue>,
    line_number: Option<FieldValue>,
}

/// Adapter for Bandit reports
#[derive(Debug, Clone, Copy, Default)]
pub struct BanditAdapter;

impl BanditAdapter {
    /// Create a new Bandit adapter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ToolAdapter for BanditAdapter {
    fn tool(&self) -> ToolKind {
        ToolKind::Bandit
    }

    fn headers(&self) -> &'static [&'static str] {
        HEADERS
    }

    fn columns(&self) -> &'static [&'static str] {
        COLUMNS
    }

    fn adapt(&self, json: &Value) -> FindingSet {
        let mut set = self.empty_set();

        // Bandit reports files it could not scan as {"filename", "reason"}
        if let Some(Value::Array(errors)) = json.get("errors") {
            for entry in errors {
                set.push_error(diagnostic_text(entry));
            }
        }

        let entries = array_field(json, "results", &mut set);
        let results: Vec<BanditResult> = decode_entries(entries, &mut set);
        set.findings = results
            .into_iter()
            .map(|r| {
                Finding::new(text_or_na(r.issue_severity), text_or(r.issue_text, ""))
                    .with_file(text_or_na(r.filename))
                    .with_line(value_or_na(r.line_number))
            })
            .collect();
        set
    }

    fn severity_tag(&self, finding: &Finding) -> SeverityTag {
        match finding.severity.to_uppercase().as_str() {
            "HIGH" => SeverityTag::High,
            "MEDIUM" => SeverityTag::Medium,
            "LOW" => SeverityTag::Low,
            _ => SeverityTag::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_result_row() {
        let json = json!({"results": [{
            "issue_severity": "HIGH",
            "issue_text": "eval used",
            "filename": "a.py",
            "line_number": 12
        }]});
        let set = BanditAdapter::new().adapt(&json);
        assert_eq!(set.len(), 1);
        assert_eq!(
            set.rows()[0],
            vec![
                FieldValue::text("HIGH"),
                FieldValue::text("eval used"),
                FieldValue::text("a.py"),
                FieldValue::Number(12)
            ]
        );
        assert!(set.errors.is_empty());
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let set = BanditAdapter::new().adapt(&json!({"results": [{}]}));
        assert_eq!(
            set.rows()[0],
            vec![
                FieldValue::not_available(),
                FieldValue::text(""),
                FieldValue::not_available(),
                FieldValue::not_available()
            ]
        );
    }

    #[test]
    fn test_scan_errors_are_carried() {
        let json = json!({
            "results": [],
            "errors": [{"filename": "broken.py", "reason": "syntax error while parsing AST from file"}]
        });
        let set = BanditAdapter::new().adapt(&json);
        assert!(set.is_empty());
        assert_eq!(
            set.errors,
            vec![r#"{"filename":"broken.py","reason":"syntax error while parsing AST from file"}"#]
        );
    }

    #[test]
    fn test_severity_tags() {
        let adapter = BanditAdapter::new();
        assert_eq!(adapter.severity_tag(&Finding::new("HIGH", "")), SeverityTag::High);
        assert_eq!(adapter.severity_tag(&Finding::new("medium", "")), SeverityTag::Medium);
        assert_eq!(adapter.severity_tag(&Finding::new("LOW", "")), SeverityTag::Low);
        assert_eq!(adapter.severity_tag(&Finding::new("N/A", "")), SeverityTag::Info);
    }
}
