//! Default values and presets for secscan-report.

use super::types::{AppConfig, BehaviorConfig, OutputConfig};
use crate::reports::OutputFormat;

/// Default directory holding the scanner JSON files
pub const DEFAULT_INPUT_DIR: &str = "artifacts";

/// Default directory reports are written to
pub const DEFAULT_OUTPUT_DIR: &str = "reports";

/// Default document title
pub const DEFAULT_TITLE: &str = "Security Scan Report";

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// HTML and PDF for human review
    Default,
    /// CI pipelines: JSON + HTML artifacts, quiet
    Ci,
    /// Audits: every format
    Audit,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ci => "ci",
            Self::Audit => "audit",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "ci" | "ci-cd" | "pipeline" => Some(Self::Ci),
            "audit" | "all" => Some(Self::Audit),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "HTML and PDF reports for human review",
            Self::Ci => "Machine-readable JSON plus an HTML artifact, minimal logging",
            Self::Audit => "HTML, PDF and JSON for archival",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Ci, Self::Audit]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Ci => Self::ci_preset(),
            ConfigPreset::Audit => Self::audit_preset(),
        }
    }

    /// CI preset: JSON for tooling, HTML for people, quiet logs.
    #[must_use]
    pub fn ci_preset() -> Self {
        Self {
            output: OutputConfig {
                formats: vec![OutputFormat::Json, OutputFormat::Html],
                ..OutputConfig::default()
            },
            behavior: BehaviorConfig { quiet: true },
            ..Self::default()
        }
    }

    /// Audit preset: every output format.
    #[must_use]
    pub fn audit_preset() -> Self {
        Self {
            output: OutputConfig {
                formats: OutputFormat::all().to_vec(),
                ..OutputConfig::default()
            },
            ..Self::default()
        }
    }
}
