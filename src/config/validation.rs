//! Configuration validation for secscan-report.

use super::types::{AppConfig, InputConfig, OutputConfig, ReportSettings};
use std::collections::HashSet;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.tools.is_empty() {
            errors.push(ConfigError::new("tools", "At least one tool must be configured"));
        }
        let mut seen = HashSet::new();
        for tool in &self.tools {
            if !seen.insert(*tool) {
                errors.push(ConfigError::new(
                    "tools",
                    format!("Tool '{}' is listed more than once", tool.name()),
                ));
            }
        }

        errors.extend(self.inputs.validate());
        errors.extend(self.output.validate());
        errors.extend(self.report.validate());
        errors
    }
}

impl Validatable for InputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (field, name) in [
            ("inputs.bandit", &self.bandit),
            ("inputs.semgrep", &self.semgrep),
            ("inputs.pylint", &self.pylint),
            ("inputs.safety", &self.safety),
        ] {
            if name.trim().is_empty() {
                errors.push(ConfigError::new(field, "File name must not be empty"));
            }
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.formats.is_empty() {
            errors.push(ConfigError::new(
                "output.formats",
                "At least one output format must be selected",
            ));
        }

        for format in &self.formats {
            if self.file_name(*format).trim().is_empty() {
                errors.push(ConfigError::new(
                    &format!("output.{format}_file"),
                    "File name must not be empty",
                ));
            }
        }

        errors
    }
}

impl Validatable for ReportSettings {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(ConfigError::new("report.title", "Title must not be empty"));
        }

        if let Some(ref timestamp) = self.timestamp {
            if let Err(e) = chrono::DateTime::parse_from_rfc3339(timestamp) {
                errors.push(ConfigError::new(
                    "report.timestamp",
                    format!("Invalid RFC 3339 timestamp '{timestamp}': {e}"),
                ));
            }
        }

        errors
    }
}
