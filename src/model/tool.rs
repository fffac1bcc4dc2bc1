//! Supported scanner tools.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A scanner whose JSON output can be normalized into a [`FindingSet`](super::FindingSet).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    /// Python AST security linter
    Bandit,
    /// Rule-based multi-language scanner
    Semgrep,
    /// Python linter (`--output-format=json`)
    Pylint,
    /// Python dependency vulnerability checker
    Safety,
}

impl ToolKind {
    /// Display name used for section titles and log messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bandit => "Bandit",
            Self::Semgrep => "Semgrep",
            Self::Pylint => "Pylint",
            Self::Safety => "Safety",
        }
    }

    /// Conventional report file name produced by the CI job for this tool.
    #[must_use]
    pub const fn default_file_name(&self) -> &'static str {
        match self {
            Self::Bandit => "bandit-report.json",
            Self::Semgrep => "semgrep-report.json",
            Self::Pylint => "pylint-report.json",
            Self::Safety => "safety-report.json",
        }
    }

    /// All supported tools, in the default report order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Semgrep, Self::Bandit, Self::Pylint, Self::Safety]
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
