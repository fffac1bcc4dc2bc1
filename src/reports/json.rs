//! JSON presenter.

use super::{OutputFormat, Presenter, RenderError};
use crate::model::Document;

/// Serializes the [`Document`] model for machine consumers.
pub struct JsonPresenter {
    /// Pretty print output
    pretty: bool,
}

impl JsonPresenter {
    /// Create a new JSON presenter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for JsonPresenter {
    fn render(&self, document: &Document) -> Result<Vec<u8>, RenderError> {
        let mut bytes = if self.pretty {
            serde_json::to_vec_pretty(document)
        } else {
            serde_json::to_vec(document)
        }
        .map_err(|e| RenderError::Serialization(e.to_string()))?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Section, SectionBody, NO_ISSUES_FOUND};

    #[test]
    fn test_compact_output() {
        let doc = Document {
            title: "Scan".to_string(),
            generated_at: "2024-03-01 12:30:00 UTC".to_string(),
            sections: vec![Section {
                title: "Safety".to_string(),
                body: SectionBody::Placeholder {
                    text: NO_ISSUES_FOUND.to_string(),
                },
                errors: Vec::new(),
            }],
        };
        let bytes = JsonPresenter::new().pretty(false).render(&doc).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        insta::assert_snapshot!(
            text.trim_end(),
            @r#"{"title":"Scan","generated_at":"2024-03-01 12:30:00 UTC","sections":[{"title":"Safety","body":{"kind":"placeholder","text":"No issues found"},"errors":[]}]}"#
        );
    }

    #[test]
    fn test_round_trips_through_serde() {
        let doc = Document {
            title: "Scan".to_string(),
            generated_at: "now".to_string(),
            sections: Vec::new(),
        };
        let bytes = JsonPresenter::new().render(&doc).unwrap();
        let parsed: Document = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, doc);
    }
}
