//! **Aggregate security scanner output into one human-readable report.**
//!
//! `secscan-report` reads the JSON output of several static-analysis and
//! security scanners (Bandit, Semgrep, Pylint and Safety), normalizes each
//! tool's schema into a common model and renders one consolidated report as
//! HTML, PDF or JSON.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`Finding`], [`FindingSet`], [`Report`] and the
//!   presentation-ready [`Document`].
//! - **[`adapters`]**: One [`ToolAdapter`] per scanner mapping its native JSON
//!   onto a [`FindingSet`]. Adapting never fails; malformed entries are
//!   recorded as errors.
//! - **[`pipeline`]**: Loading inputs, aggregating them in configured order
//!   and writing the outputs.
//! - **[`reports`]**: The document builder and the HTML, PDF and JSON
//!   presenters.
//! - **[`config`]**: The explicit per-invocation configuration, YAML config
//!   files and validation.
//!
//! ## Getting Started
//!
//! ```
//! use secscan_report::{adapter_for, to_document, Report, ToolKind};
//! use serde_json::json;
//!
//! let bandit = json!({"results": [{"issue_severity": "HIGH", "issue_text": "eval used",
//!                                  "filename": "a.py", "line_number": 12}]});
//! let semgrep = json!({"results": [], "errors": [{"message": "timeout"}]});
//!
//! let report = Report::new(vec![
//!     adapter_for(ToolKind::Bandit).adapt(&bandit),
//!     adapter_for(ToolKind::Semgrep).adapt(&semgrep),
//! ]);
//! let document = to_document(&report);
//!
//! assert_eq!(document.sections.len(), 2);
//! assert_eq!(document.total_rows(), 1);
//! assert_eq!(document.sections[1].errors, vec!["timeout"]);
//! ```
//!
//! ## Running the Full Pipeline
//!
//! ```no_run
//! use secscan_report::{pipeline, AppConfig, MissingInputPolicy};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::builder()
//!         .input_dir("artifacts")
//!         .output_dir("reports")
//!         .missing_input(MissingInputPolicy::Placeholder)
//!         .build();
//!
//!     let summary = pipeline::run(&config)?;
//!     for path in &summary.written {
//!         println!("wrote {}", path.display());
//!     }
//!     std::process::exit(summary.exit_code());
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // PDF layout math converts between usize and f32; values are small
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unused_self
)]

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;

pub use adapters::{adapter_for, ToolAdapter};
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset, MissingInputPolicy};
pub use config::{ConfigError, Validatable};
pub use error::{ErrorContext, Result, ScanReportError};
pub use model::{
    Document, FieldValue, Finding, FindingSet, Location, Report, Row, Section, SectionBody,
    SeverityTag, Table, ToolKind,
};
pub use pipeline::{collect_report, load, Aggregator, LoadError, LoadErrorKind, RunSummary};
pub use reports::{create_presenter, to_document, DocumentBuilder, OutputFormat, Presenter};
