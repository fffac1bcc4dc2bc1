//! Document building and presentation.
//!
//! The [`DocumentBuilder`] turns an aggregated [`Report`](crate::model::Report)
//! into a self-describing [`Document`]; presenters then emit it in one of
//! several output formats:
//! - HTML: Styled single-page report with severity-colored rows
//! - PDF: Paginated report, one page group per tool
//! - JSON: The document model for programmatic integration
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation.
//! Scanner messages are untrusted and must be escaped before embedding in
//! HTML or PDF content.

mod builder;
pub mod escape;
mod html;
mod json;
mod pdf;
mod types;

pub use builder::{to_document, DocumentBuilder, TIMESTAMP_FORMAT};
pub use html::HtmlPresenter;
pub use json::JsonPresenter;
pub use pdf::PdfPresenter;
pub use types::OutputFormat;

use crate::model::Document;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur while rendering a document
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error(transparent)]
    Format(#[from] std::fmt::Error),
}

/// Trait for document presenters
///
/// Presenters only know about sections, tables and placeholders; nothing in
/// a presenter is specific to a scanner.
pub trait Presenter {
    /// Render the document to bytes
    fn render(&self, document: &Document) -> Result<Vec<u8>, RenderError>;

    /// Get the format this presenter produces
    fn format(&self) -> OutputFormat;

    /// Render the document and write it to a writer
    fn write_to(&self, document: &Document, writer: &mut dyn Write) -> Result<(), RenderError> {
        let bytes = self.render(document)?;
        writer.write_all(&bytes)?;
        Ok(())
    }
}

/// Create a presenter for the given format
#[must_use]
pub fn create_presenter(format: OutputFormat) -> Box<dyn Presenter> {
    match format {
        OutputFormat::Html => Box::new(HtmlPresenter::new()),
        OutputFormat::Pdf => Box::new(PdfPresenter::new()),
        OutputFormat::Json => Box::new(JsonPresenter::new()),
    }
}
