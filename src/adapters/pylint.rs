//! Pylint JSON adapter.
//!
//! Pylint's JSON reporter emits a top-level array of messages
//! (`[{type, message, module, line, ...}]`). The `type` classification plays
//! the role of severity.

use super::entries::{decode_entries, json_type, text_or, text_or_na, value_or_na};
use super::ToolAdapter;
use crate::model::{columns, FieldValue, Finding, FindingSet, SeverityTag, ToolKind};
use serde::Deserialize;
use serde_json::Value;

const HEADERS: &[&str] = &["Type", "Message", "Module", "Line"];
const COLUMNS: &[&str] = &[columns::SEVERITY, columns::MESSAGE, columns::FILE, columns::LINE];

#[derive(Debug, Deserialize)]
struct PylintMessage {
    #[serde(rename = "type")]
    kind: Option<FieldValue>,
    message: Option<FieldValue>,
    module: Option<FieldValue>,
    line: Option<FieldValue>,
    #[serde(rename = "message-id")]
    message_id: Option<FieldValue>,
}

/// Adapter for Pylint reports
#[derive(Debug, Clone, Copy, Default)]
pub struct PylintAdapter;

impl PylintAdapter {
    /// Create a new Pylint adapter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ToolAdapter for PylintAdapter {
    fn tool(&self) -> ToolKind {
        ToolKind::Pylint
    }

    fn headers(&self) -> &'static [&'static str] {
        HEADERS
    }

    fn columns(&self) -> &'static [&'static str] {
        COLUMNS
    }

    fn adapt(&self, json: &Value) -> FindingSet {
        let mut set = self.empty_set();

        let entries: &[Value] = match json {
            Value::Array(items) => items,
            // No message array at all: nothing was reported
            Value::Object(_) | Value::Null => {
                tracing::debug!("Pylint report is not an array, treating as empty");
                &[]
            }
            other => {
                let error = format!(
                    "unexpected Pylint report shape: expected an array, found {}",
                    json_type(other)
                );
                tracing::warn!("{}", error);
                set.push_error(error);
                &[]
            }
        };

        let messages: Vec<PylintMessage> = decode_entries(entries, &mut set);
        set.findings = messages
            .into_iter()
            .map(|m| {
                let mut finding = Finding::new(text_or_na(m.kind), text_or(m.message, ""))
                    .with_file(text_or_na(m.module))
                    .with_line(value_or_na(m.line));
                if let Some(id) = m.message_id {
                    finding = finding.with_extra("message_id", id);
                }
                finding
            })
            .collect();
        set
    }

    fn severity_tag(&self, finding: &Finding) -> SeverityTag {
        match finding.severity.to_lowercase().as_str() {
            "fatal" => SeverityTag::Critical,
            "error" => SeverityTag::High,
            "warning" => SeverityTag::Medium,
            "convention" | "refactor" => SeverityTag::Low,
            _ => SeverityTag::Info,
        }
    }
}
