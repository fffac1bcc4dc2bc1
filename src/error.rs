//! Unified error types for secscan-report.
//!
//! Loading and rendering report their failures through their own types
//! ([`LoadError`](crate::pipeline::LoadError),
//! [`RenderError`](crate::reports::RenderError)). [`ScanReportError`] covers
//! file output and configuration validation, and carries a chain of context
//! strings describing where the failure happened.

use crate::config::ConfigError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for secscan-report operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScanReportError {
    /// IO errors with context; the OS error is the source
    #[error("IO error{}", io_detail(.path.as_deref(), .message))]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Convenient Result type for secscan-report operations
pub type Result<T> = std::result::Result<T, ScanReportError>;

fn io_detail(path: Option<&Path>, message: &str) -> String {
    match (path, message.is_empty()) {
        (Some(path), true) => format!(" at {}", path.display()),
        (Some(path), false) => format!(" at {}: {message}", path.display()),
        (None, true) => String::new(),
        (None, false) => format!(": {message}"),
    }
}

impl ScanReportError {
    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            message: String::new(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Collapse configuration validation failures into one error
    pub fn from_config_errors(errors: &[ConfigError]) -> Self {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        Self::Validation(messages.join("; "))
    }
}

impl From<std::io::Error> for ScanReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: String::new(),
            source: err,
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain outward, so an error that passed through two layers
/// reads `"outer: inner"`.
///
/// # Example
///
/// ```
/// use secscan_report::error::{ErrorContext, ScanReportError};
///
/// let result: Result<(), ScanReportError> = Err(ScanReportError::validation("empty title"));
/// let err = result.context("checking report settings").unwrap_err();
/// assert_eq!(err.to_string(), "Validation failed: checking report settings: empty title");
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<ScanReportError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: ScanReportError, new_ctx: &str) -> ScanReportError {
    match err {
        ScanReportError::Io {
            path,
            message,
            source,
        } => ScanReportError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        ScanReportError::Validation(msg) => {
            ScanReportError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn denied() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied")
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = ScanReportError::io("/reports/security_report.pdf", denied());
        assert_eq!(err.to_string(), "IO error at /reports/security_report.pdf");
    }

    #[test]
    fn test_io_reason_appears_once_in_chain() {
        let result: Result<()> = Err(ScanReportError::io("/reports/out.html", denied()));
        let err = anyhow::Error::from(result.context("writing 13 bytes").unwrap_err());
        assert_eq!(
            format!("{err:#}"),
            "IO error at /reports/out.html: writing 13 bytes: denied"
        );
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(ScanReportError::validation("empty title")).context("checking report settings")
        }

        fn outer() -> Result<()> {
            inner().context("loading config")
        }

        match outer() {
            Err(ScanReportError::Validation(msg)) => {
                assert_eq!(msg, "loading config: checking report settings: empty title");
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_context_on_converted_error() {
        let result: std::result::Result<(), std::io::Error> = Err(denied());
        let err = result.context("creating output directory").unwrap_err();
        assert!(matches!(
            err,
            ScanReportError::Io { path: None, ref message, .. } if message == "creating output directory"
        ));
        assert_eq!(err.to_string(), "IO error: creating output directory");
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;
        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called);

        let err_result: Result<i32> = Err(ScanReportError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called);
    }

    #[test]
    fn test_from_config_errors() {
        let errors = vec![
            ConfigError {
                field: "tools".to_string(),
                message: "At least one tool must be configured".to_string(),
            },
            ConfigError {
                field: "report.title".to_string(),
                message: "Title must not be empty".to_string(),
            },
        ];
        let err = ScanReportError::from_config_errors(&errors);
        assert_eq!(
            err.to_string(),
            "Validation failed: tools: At least one tool must be configured; report.title: Title must not be empty"
        );
    }
}
