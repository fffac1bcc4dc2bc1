//! Configuration types for secscan-report.
//!
//! One [`AppConfig`] is constructed per invocation and passed explicitly
//! through the pipeline; nothing is read from global state.

use crate::model::ToolKind;
use crate::reports::OutputFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Where the scanner JSON files live
    pub inputs: InputConfig,
    /// Tools to include, in report order
    pub tools: Vec<ToolKind>,
    /// Output location and formats
    pub output: OutputConfig,
    /// Report content settings
    pub report: ReportSettings,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            inputs: InputConfig::default(),
            tools: ToolKind::all().to_vec(),
            output: OutputConfig::default(),
            report: ReportSettings::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the input directory.
    pub fn input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.inputs.dir = dir.into();
        self
    }

    /// Override the input file name for one tool.
    pub fn input_file(mut self, tool: ToolKind, file: impl Into<String>) -> Self {
        self.config.inputs.set_file(tool, file.into());
        self
    }

    /// Set the tools to include, in report order.
    pub fn tools(mut self, tools: Vec<ToolKind>) -> Self {
        self.config.tools = tools;
        self
    }

    /// Set the output directory.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output.dir = dir.into();
        self
    }

    /// Set the output formats.
    pub fn formats(mut self, formats: Vec<OutputFormat>) -> Self {
        self.config.output.formats = formats;
        self
    }

    /// Set the report title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.report.title = title.into();
        self
    }

    /// Set the policy for tools whose input file is missing.
    pub const fn missing_input(mut self, policy: MissingInputPolicy) -> Self {
        self.config.report.missing_input = policy;
        self
    }

    /// Pin the generation timestamp (RFC 3339).
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.config.report.timestamp = Some(timestamp.into());
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Input file locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct InputConfig {
    /// Directory containing the scanner reports
    pub dir: PathBuf,
    /// Bandit report file name
    pub bandit: String,
    /// Semgrep report file name
    pub semgrep: String,
    /// Pylint report file name
    pub pylint: String,
    /// Safety report file name
    pub safety: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(super::DEFAULT_INPUT_DIR),
            bandit: ToolKind::Bandit.default_file_name().to_string(),
            semgrep: ToolKind::Semgrep.default_file_name().to_string(),
            pylint: ToolKind::Pylint.default_file_name().to_string(),
            safety: ToolKind::Safety.default_file_name().to_string(),
        }
    }
}

impl InputConfig {
    /// Configured file name for a tool
    #[must_use]
    pub fn file_name(&self, tool: ToolKind) -> &str {
        match tool {
            ToolKind::Bandit => &self.bandit,
            ToolKind::Semgrep => &self.semgrep,
            ToolKind::Pylint => &self.pylint,
            ToolKind::Safety => &self.safety,
        }
    }

    /// Set the file name for a tool
    pub fn set_file(&mut self, tool: ToolKind, file: String) {
        match tool {
            ToolKind::Bandit => self.bandit = file,
            ToolKind::Semgrep => self.semgrep = file,
            ToolKind::Pylint => self.pylint = file,
            ToolKind::Safety => self.safety = file,
        }
    }

    /// Full input path for a tool
    #[must_use]
    pub fn path_for(&self, tool: ToolKind) -> PathBuf {
        self.dir.join(self.file_name(tool))
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the reports are written to (created if absent)
    pub dir: PathBuf,
    /// HTML report file name
    pub html_file: String,
    /// PDF report file name
    pub pdf_file: String,
    /// JSON document file name
    pub json_file: String,
    /// Formats to emit
    pub formats: Vec<OutputFormat>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(super::DEFAULT_OUTPUT_DIR),
            html_file: "security_report.html".to_string(),
            pdf_file: "security_report.pdf".to_string(),
            json_file: "security_report.json".to_string(),
            formats: vec![OutputFormat::Html, OutputFormat::Pdf],
        }
    }
}

impl OutputConfig {
    /// Configured file name for a format
    #[must_use]
    pub fn file_name(&self, format: OutputFormat) -> &str {
        match format {
            OutputFormat::Html => &self.html_file,
            OutputFormat::Pdf => &self.pdf_file,
            OutputFormat::Json => &self.json_file,
        }
    }

    /// Full output path for a format
    #[must_use]
    pub fn path_for(&self, format: OutputFormat) -> PathBuf {
        self.dir.join(self.file_name(format))
    }
}

/// What to do with a tool whose input file does not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MissingInputPolicy {
    /// Keep the tool's section with zero findings and a load-error entry
    #[default]
    Placeholder,
    /// Leave the tool out of the report entirely
    Omit,
}

/// Report content settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ReportSettings {
    /// Document title
    pub title: String,
    /// Policy for missing input files
    pub missing_input: MissingInputPolicy,
    /// Fixed generation timestamp (RFC 3339) for reproducible output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: super::DEFAULT_TITLE.to_string(),
            missing_input: MissingInputPolicy::Placeholder,
            timestamp: None,
        }
    }
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
}
