//! Configuration module for secscan-report.
//!
//! This module provides the explicit configuration object that replaces any
//! global state: input paths, output paths and the ordered tool list are
//! constructed once per invocation and passed through the pipeline.
//!
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use secscan_report::config::{AppConfig, ConfigPreset, MissingInputPolicy};
//!
//! // Use defaults
//! let config = AppConfig::default();
//!
//! // Use a preset
//! let config = AppConfig::from_preset(ConfigPreset::Ci);
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .input_dir("artifacts")
//!     .missing_input(MissingInputPolicy::Omit)
//!     .build();
//! ```
//!
//! # Configuration File
//!
//! Place a `.secscan-report.yaml` file in your project root or `~/.config/secscan-report/`:
//!
//! ```yaml
//! inputs:
//!   dir: artifacts
//! output:
//!   formats: [html, pdf]
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{ConfigPreset, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_TITLE};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, InputConfig, MissingInputPolicy, OutputConfig,
    ReportSettings,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.secscan-report.yaml` config files.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
