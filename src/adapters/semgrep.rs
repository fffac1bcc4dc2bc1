//! Semgrep JSON adapter.
//!
//! Expected shape:
//! `{"results": [{check_id, path, start: {line}, extra: {severity, message}}], "errors": [{message}]}`.

use super::entries::{array_field, decode_entries, diagnostic_text, text_or, text_or_na, value_or_na};
use super::ToolAdapter;
use crate::model::{columns, FieldValue, Finding, FindingSet, SeverityTag, ToolKind};
use serde::Deserialize;
use serde_json::Value;

const HEADERS: &[&str] = &["Check ID", "Severity", "Message", "File", "Line"];
const COLUMNS: &[&str] = &[
    columns::CHECK_ID,
    columns::SEVERITY,
    columns::MESSAGE,
    columns::FILE,
    columns::LINE,
];

#[derive(Debug, Deserialize)]
struct SemgrepResult {
    check_id: Option<FieldValue>,
    path: Option<FieldValue>,
    start: Option<SemgrepPosition>,
    extra: Option<SemgrepExtra>,
}

#[derive(Debug, Default, Deserialize)]
struct SemgrepPosition {
    line: Option<FieldValue>,
}

#[derive(Debug, Default, Deserialize)]
struct SemgrepExtra {
    severity: Option<FieldValue>,
    message: Option<FieldValue>,
}

/// Adapter for Semgrep reports
#[derive(Debug, Clone, Copy, Default)]
pub struct SemgrepAdapter;

impl SemgrepAdapter {
    /// Create a new Semgrep adapter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ToolAdapter for SemgrepAdapter {
    fn tool(&self) -> ToolKind {
        ToolKind::Semgrep
    }

    fn headers(&self) -> &'static [&'static str] {
        HEADERS
    }

    fn columns(&self) -> &'static [&'static str] {
        COLUMNS
    }

    fn adapt(&self, json: &Value) -> FindingSet {
        let mut set = self.empty_set();

        match json.get("errors") {
            Some(Value::Array(errors)) => {
                for entry in errors {
                    set.push_error(diagnostic_text(entry));
                }
            }
            Some(Value::String(error)) => set.push_error(error.clone()),
            _ => {}
        }

        let entries = array_field(json, "results", &mut set);
        let results: Vec<SemgrepResult> = decode_entries(entries, &mut set);
        set.findings = results
            .into_iter()
            .map(|r| {
                // `null` sub-objects count as absent
                let extra = r.extra.unwrap_or_default();
                let start = r.start.unwrap_or_default();
                Finding::new(text_or_na(extra.severity), text_or(extra.message, ""))
                    .with_file(text_or_na(r.path))
                    .with_line(value_or_na(start.line))
                    .with_extra(columns::CHECK_ID, value_or_na(r.check_id))
            })
            .collect();
        set
    }

    fn severity_tag(&self, finding: &Finding) -> SeverityTag {
        match finding.severity.to_uppercase().as_str() {
            "CRITICAL" => SeverityTag::Critical,
            "ERROR" | "HIGH" => SeverityTag::High,
            "WARNING" | "MEDIUM" => SeverityTag::Medium,
            "LOW" => SeverityTag::Low,
            _ => SeverityTag::Info,
        }
    }
}
