//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::{AppConfig, InputConfig, MissingInputPolicy, OutputConfig, ReportSettings};
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".secscan-report.yaml",
    ".secscan-report.yml",
    "secscan-report.yaml",
    "secscan-report.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/secscan-report/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    if let Some(path) = find_git_root().and_then(|root| find_config_in_dir(&root)) {
        return Some(path);
    }

    if let Some(path) =
        dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join("secscan-report")))
    {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    /// File not found
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// IO error reading file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults override, so a CLI config
    /// built from defaults plus flags can be layered over file config.
    pub fn merge(&mut self, other: &Self) {
        let input_defaults = InputConfig::default();
        if other.inputs.dir != input_defaults.dir {
            self.inputs.dir.clone_from(&other.inputs.dir);
        }
        for &tool in crate::model::ToolKind::all() {
            let name = other.inputs.file_name(tool);
            if name != input_defaults.file_name(tool) {
                self.inputs.set_file(tool, name.to_string());
            }
        }

        if other.tools != crate::model::ToolKind::all() {
            self.tools.clone_from(&other.tools);
        }

        let output_defaults = OutputConfig::default();
        if other.output.dir != output_defaults.dir {
            self.output.dir.clone_from(&other.output.dir);
        }
        if other.output.html_file != output_defaults.html_file {
            self.output.html_file.clone_from(&other.output.html_file);
        }
        if other.output.pdf_file != output_defaults.pdf_file {
            self.output.pdf_file.clone_from(&other.output.pdf_file);
        }
        if other.output.json_file != output_defaults.json_file {
            self.output.json_file.clone_from(&other.output.json_file);
        }
        if other.output.formats != output_defaults.formats {
            self.output.formats.clone_from(&other.output.formats);
        }

        let report_defaults = ReportSettings::default();
        if other.report.title != report_defaults.title {
            self.report.title.clone_from(&other.report.title);
        }
        if other.report.missing_input != MissingInputPolicy::default() {
            self.report.missing_input = other.report.missing_input;
        }
        if other.report.timestamp.is_some() {
            self.report.timestamp.clone_from(&other.report.timestamp);
        }

        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# secscan-report configuration
# Place this file at .secscan-report.yaml in your project root or ~/.config/secscan-report/

{}
",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# secscan-report Configuration File
# ==================================
#
# Place it at:
#   - .secscan-report.yaml in your project root
#   - ~/.config/secscan-report/secscan-report.yaml for global config
#
# CLI arguments always override file settings.

# Scanner report locations
inputs:
  dir: artifacts
  bandit: bandit-report.json
  semgrep: semgrep-report.json
  pylint: pylint-report.json
  safety: safety-report.json

# Tools to include, in report order
tools:
  - semgrep
  - bandit
  - pylint
  - safety

# Output configuration
output:
  dir: reports
  html_file: security_report.html
  pdf_file: security_report.pdf
  json_file: security_report.json
  # Any of: html, pdf, json
  formats:
    - html
    - pdf

# Report content
report:
  title: Security Scan Report
  # placeholder: keep a section with a load-error entry for missing inputs
  # omit: leave tools with missing inputs out of the report
  missing_input: placeholder
  # Pin the generation time for reproducible output
  # timestamp: 2024-01-01T00:00:00Z

behavior:
  quiet: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
