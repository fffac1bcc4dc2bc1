//! Pipeline orchestration: load, aggregate, build, render, write.
//!
//! Everything runs sequentially on the calling thread. A failure for one
//! tool's input never stops the others, and a failure to render or write one
//! output format never stops the remaining formats.

mod aggregate;
mod load;
mod output;

pub use aggregate::Aggregator;
pub use load::{load, load_slice, load_str, LoadError, LoadErrorKind, LoadOutcome, MAX_INPUT_FILE_SIZE};
pub use output::{ensure_output_dir, write_output};

use crate::config::{AppConfig, Validatable};
use crate::error::ScanReportError;
use crate::model::{Document, Report};
use crate::reports::{create_presenter, DocumentBuilder, OutputFormat, RenderError};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::PathBuf;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A presenter failed; other formats are still emitted
    #[error("Rendering {format} failed")]
    RenderFailed {
        format: OutputFormat,
        #[source]
        source: RenderError,
    },

    /// An output file could not be written
    #[error("Writing {} failed", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: ScanReportError,
    },

    /// The output directory could not be created; nothing was written
    #[error("Preparing output directory {} failed", dir.display())]
    OutputDirFailed {
        dir: PathBuf,
        #[source]
        source: ScanReportError,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Report written and every tool loaded cleanly
    pub const SUCCESS: i32 = 0;
    /// Report written but at least one tool recorded errors
    pub const TOOL_ERRORS: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Outcome of a full pipeline run
#[derive(Debug)]
pub struct RunSummary {
    /// The rendered document, valid even if emission failed
    pub document: Document,
    /// Files written, in configured format order
    pub written: Vec<PathBuf>,
    /// Render or write failures
    pub failures: Vec<PipelineError>,
}

impl RunSummary {
    /// Process exit code for this run
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if !self.failures.is_empty() {
            exit_codes::ERROR
        } else if self.document.sections_with_errors().next().is_some() {
            exit_codes::TOOL_ERRORS
        } else {
            exit_codes::SUCCESS
        }
    }
}

/// Resolve the report timestamp: the pinned one if configured, else now
#[must_use]
pub fn report_timestamp(config: &AppConfig) -> DateTime<Utc> {
    match config.report.timestamp.as_deref() {
        Some(pinned) => match DateTime::parse_from_rfc3339(pinned) {
            Ok(ts) => ts.with_timezone(&Utc),
            Err(e) => {
                tracing::warn!("Ignoring invalid pinned timestamp {:?}: {}", pinned, e);
                Utc::now()
            }
        },
        None => Utc::now(),
    }
}

/// Load every configured tool's input and aggregate them in configured order
#[must_use]
pub fn collect_report(config: &AppConfig) -> Report {
    let mut loads = HashMap::with_capacity(config.tools.len());
    for &tool in &config.tools {
        let path = config.inputs.path_for(tool);
        tracing::debug!("Loading {} output from {}", tool, path.display());
        loads.insert(tool, load(&path));
    }

    Aggregator::new(config.report.missing_input).build_at(
        &config.tools,
        loads,
        report_timestamp(config),
    )
}

/// Build the presentation document for a report
#[must_use]
pub fn build_document(config: &AppConfig, report: &Report) -> Document {
    DocumentBuilder::new()
        .title(config.report.title.clone())
        .build(report)
}

/// Run the whole pipeline and write every configured output format.
///
/// Fails only for an invalid configuration. Render, output directory and
/// per-format write failures are collected in [`RunSummary::failures`], and
/// the document is returned either way.
pub fn run(config: &AppConfig) -> anyhow::Result<RunSummary> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ScanReportError::from_config_errors(&errors).into());
    }

    let report = collect_report(config);
    tracing::info!(
        "Aggregated {} findings from {} tools",
        report.total_findings(),
        report.finding_sets.len()
    );
    let document = build_document(config, &report);

    let mut failures = Vec::new();
    let mut rendered = Vec::with_capacity(config.output.formats.len());
    for &format in &config.output.formats {
        match create_presenter(format).render(&document) {
            Ok(bytes) => rendered.push((format, bytes)),
            Err(source) => {
                failures.push(PipelineError::RenderFailed { format, source });
            }
        }
    }

    let mut written = Vec::with_capacity(rendered.len());
    if !rendered.is_empty() {
        if let Err(source) = ensure_output_dir(&config.output.dir) {
            failures.push(PipelineError::OutputDirFailed {
                dir: config.output.dir.clone(),
                source,
            });
            rendered.clear();
        }
    }
    for (format, bytes) in rendered {
        let path = config.output.path_for(format);
        match write_output(&path, &bytes, config.behavior.quiet) {
            Ok(()) => written.push(path),
            Err(source) => failures.push(PipelineError::WriteFailed { path, source }),
        }
    }

    Ok(RunSummary {
        document,
        written,
        failures,
    })
}
