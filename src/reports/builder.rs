//! Document building: turns a [`Report`] into a presentation-ready [`Document`].

use crate::adapters::adapter_for;
use crate::config::DEFAULT_TITLE;
use crate::model::{
    Document, FindingSet, Report, Row, Section, SectionBody, Table, NO_ISSUES_FOUND,
};

/// Timestamp format shown under the document title
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Builds a [`Document`] from an aggregated report.
///
/// Sections follow the report's finding-set order exactly. An empty finding
/// set becomes a placeholder section, never a header-only table.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    title: String,
}

impl DocumentBuilder {
    /// Create a builder with the default title
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Set the document title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Build the document
    #[must_use]
    pub fn build(&self, report: &Report) -> Document {
        Document {
            title: self.title.clone(),
            generated_at: report.generated_at.format(TIMESTAMP_FORMAT).to_string(),
            sections: report.finding_sets.iter().map(build_section).collect(),
        }
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a document with the default title
#[must_use]
pub fn to_document(report: &Report) -> Document {
    DocumentBuilder::new().build(report)
}

fn build_section(set: &FindingSet) -> Section {
    let body = if set.is_empty() {
        SectionBody::Placeholder {
            text: NO_ISSUES_FOUND.to_string(),
        }
    } else {
        let adapter = adapter_for(set.tool);
        let rows = set
            .findings
            .iter()
            .map(|finding| Row {
                cells: set.project(finding),
                tag: adapter.severity_tag(finding),
            })
            .collect();
        SectionBody::Table(Table {
            headers: set.headers.clone(),
            rows,
        })
    };

    Section {
        title: set.tool_name.clone(),
        body,
        errors: set.errors.clone(),
    }
}
