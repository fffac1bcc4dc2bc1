//! Presentation-ready document model.
//!
//! A [`Document`] is fully self-describing: presenters render sections,
//! tables and placeholders without knowing which scanner produced them.

use super::FieldValue;
use serde::{Deserialize, Serialize};

/// Placeholder shown for a tool that reported no findings.
pub const NO_ISSUES_FOUND: &str = "No issues found";

/// Display-only severity classification used for row styling.
///
/// Derived per tool from its own severity field; never used to compare
/// findings across tools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTag {
    Critical,
    High,
    Medium,
    Low,
    #[default]
    Info,
}

impl SeverityTag {
    /// Lowercase tag name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Info => "info",
        }
    }

    /// CSS class applied to table rows
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Critical => "severity-critical",
            Self::High => "severity-high",
            Self::Medium => "severity-medium",
            Self::Low => "severity-low",
            Self::Info => "severity-info",
        }
    }
}

impl std::fmt::Display for SeverityTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One data row with its styling tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<FieldValue>,
    pub tag: SeverityTag,
}

/// A table with a header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Number of columns
    #[must_use]
    pub fn width(&self) -> usize {
        self.headers.len()
    }
}

/// Section content: either a table or an empty-state placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBody {
    Table(Table),
    Placeholder { text: String },
}

/// One section per tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub body: SectionBody,
    /// Errors carried over from the finding set
    pub errors: Vec<String>,
}

impl Section {
    /// The table, if this section has one
    #[must_use]
    pub fn table(&self) -> Option<&Table> {
        match &self.body {
            SectionBody::Table(table) => Some(table),
            SectionBody::Placeholder { .. } => None,
        }
    }

    /// The placeholder text, if the section is empty
    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        match &self.body {
            SectionBody::Placeholder { text } => Some(text),
            SectionBody::Table(_) => None,
        }
    }

    /// Number of data rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.table().map_or(0, |t| t.rows.len())
    }
}

/// Format-independent report document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    /// Preformatted generation timestamp
    pub generated_at: String,
    pub sections: Vec<Section>,
}

impl Document {
    /// Total data rows across all sections
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.sections.iter().map(Section::row_count).sum()
    }

    /// Sections that carry at least one error
    pub fn sections_with_errors(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| !s.errors.is_empty())
    }
}
