//! Normalized findings and per-tool finding sets.

use super::ToolKind;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Placeholder written into any field a tool did not supply.
pub const NOT_AVAILABLE: &str = "N/A";

/// Canonical column keys understood by [`Finding::field`].
pub mod columns {
    pub const SEVERITY: &str = "severity";
    pub const MESSAGE: &str = "message";
    pub const FILE: &str = "file";
    pub const LINE: &str = "line";
    pub const CHECK_ID: &str = "check_id";
    pub const PACKAGE: &str = "package";
}

/// A single table cell value.
///
/// Scanner output mixes strings and integers (line numbers), so numbers are
/// kept as numbers to let presenters and JSON output round-trip them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(i64),
    Text(String),
}

impl FieldValue {
    /// Create a text value
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// The `N/A` placeholder
    #[must_use]
    pub fn not_available() -> Self {
        Self::Text(NOT_AVAILABLE.to_string())
    }

    /// Convert an arbitrary JSON value without failing.
    ///
    /// Integers stay numeric; strings are copied; everything else is kept as
    /// its compact JSON text. `null` maps to `None` so callers apply their
    /// own default.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Number(n) => Some(
                n.as_i64()
                    .map_or_else(|| Self::Text(n.to_string()), Self::Number),
            ),
            other => Some(Self::Text(other.to_string())),
        }
    }

    /// Render as display text.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }

    /// Check if this is an empty text value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        Self::Number(i64::from(n))
    }
}

// Lenient: any JSON value is accepted, see `from_json`.
impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value).unwrap_or_else(|| Self::text("")))
    }
}

/// Where a finding was reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: FieldValue,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            file: NOT_AVAILABLE.to_string(),
            line: FieldValue::not_available(),
        }
    }
}

/// One reported issue from a single tool run.
///
/// Every field is always populated; adapters fill gaps with [`NOT_AVAILABLE`]
/// or an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Tool-specific severity or classification, never renormalized
    pub severity: String,
    pub message: String,
    pub location: Location,
    /// Tool-specific extra fields (rule id, package name, ...)
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub extras: IndexMap<String, FieldValue>,
}

impl Default for Finding {
    fn default() -> Self {
        Self {
            severity: NOT_AVAILABLE.to_string(),
            message: String::new(),
            location: Location::default(),
            extras: IndexMap::new(),
        }
    }
}

impl Finding {
    /// Create a finding with the given severity and message
    pub fn new(severity: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: severity.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    /// Set the file path
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.location.file = file.into();
        self
    }

    /// Set the line
    #[must_use]
    pub fn with_line(mut self, line: impl Into<FieldValue>) -> Self {
        self.location.line = line.into();
        self
    }

    /// Attach a tool-specific field
    #[must_use]
    pub fn with_extra(mut self, key: &str, value: impl Into<FieldValue>) -> Self {
        self.extras.insert(key.to_string(), value.into());
        self
    }

    /// Look up a field by column key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            columns::SEVERITY => Some(FieldValue::text(&self.severity)),
            columns::MESSAGE => Some(FieldValue::text(&self.message)),
            columns::FILE => Some(FieldValue::text(&self.location.file)),
            columns::LINE => Some(self.location.line.clone()),
            other => self.extras.get(other).cloned(),
        }
    }
}

/// All findings contributed by one tool in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingSet {
    pub tool: ToolKind,
    pub tool_name: String,
    /// Display labels, same length as `columns`
    pub headers: Vec<String>,
    /// Field keys projected into each row
    pub columns: Vec<String>,
    /// Source order preserved
    pub findings: Vec<Finding>,
    /// Tool-level errors: scanner diagnostics, load failures, skipped entries
    pub errors: Vec<String>,
}

impl FindingSet {
    /// Create an empty set with the given table shape.
    #[must_use]
    pub fn new(tool: ToolKind, headers: &[&str], columns: &[&str]) -> Self {
        debug_assert_eq!(headers.len(), columns.len());
        Self {
            tool,
            tool_name: tool.name().to_string(),
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
            findings: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Number of findings
    #[must_use]
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Check if the tool reported nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Check if any tool-level error was recorded
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Record a tool-level error
    pub fn push_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    /// Project a finding through `columns` into one row.
    ///
    /// The row always has exactly `columns.len()` cells.
    #[must_use]
    pub fn project(&self, finding: &Finding) -> Vec<FieldValue> {
        self.columns
            .iter()
            .map(|key| finding.field(key).unwrap_or_else(FieldValue::not_available))
            .collect()
    }

    /// All rows in source order
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<FieldValue>> {
        self.findings.iter().map(|f| self.project(f)).collect()
    }
}
