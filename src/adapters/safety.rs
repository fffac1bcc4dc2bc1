//! Safety JSON adapter.
//!
//! Expected shape: `{"vulnerabilities": [{package_name, advisory, severity}]}`.

use super::entries::{array_field, decode_entries, text_or, text_or_na, value_or_na};
use super::ToolAdapter;
use crate::model::{columns, FieldValue, Finding, FindingSet, SeverityTag, ToolKind};
use serde::Deserialize;
use serde_json::Value;

const HEADERS: &[&str] = &["Package", "Vulnerability", "Severity"];
const COLUMNS: &[&str] = &[columns::PACKAGE, columns::MESSAGE, columns::SEVERITY];

#[derive(Debug, Deserialize)]
struct SafetyVulnerability {
    package_name: Option<FieldValue>,
    advisory: Option<FieldValue>,
    severity: Option<FieldValue>,
}

/// Adapter for Safety reports
#[derive(Debug, Clone, Copy, Default)]
pub struct SafetyAdapter;

impl SafetyAdapter {
    /// Create a new Safety adapter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ToolAdapter for SafetyAdapter {
    fn tool(&self) -> ToolKind {
        ToolKind::Safety
    }

    fn headers(&self) -> &'static [&'static str] {
        HEADERS
    }

    fn columns(&self) -> &'static [&'static str] {
        COLUMNS
    }

    fn adapt(&self, json: &Value) -> FindingSet {
        let mut set = self.empty_set();
        let entries = array_field(json, "vulnerabilities", &mut set);
        let vulns: Vec<SafetyVulnerability> = decode_entries(entries, &mut set);
        set.findings = vulns
            .into_iter()
            .map(|v| {
                // Dependency findings have no source location
                Finding::new(text_or_na(v.severity), text_or(v.advisory, ""))
                    .with_extra(columns::PACKAGE, value_or_na(v.package_name))
            })
            .collect();
        set
    }

    fn severity_tag(&self, finding: &Finding) -> SeverityTag {
        match finding.severity.to_lowercase().as_str() {
            "critical" => SeverityTag::Critical,
            "high" => SeverityTag::High,
            "medium" | "moderate" => SeverityTag::Medium,
            "low" => SeverityTag::Low,
            _ => SeverityTag::Info,
        }
    }
}
