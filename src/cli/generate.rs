//! Generate command handler.
//!
//! Implements the `generate` subcommand: load every configured scanner
//! output, aggregate, and write the configured report formats.

use crate::config::AppConfig;
use crate::pipeline::{self, exit_codes};
use anyhow::Result;

/// Run the generate command
#[allow(clippy::needless_pass_by_value)]
pub fn run_generate(config: AppConfig) -> Result<i32> {
    let summary = pipeline::run(&config)?;

    for section in summary.document.sections_with_errors() {
        for error in &section.errors {
            tracing::warn!("{}: {}", section.title, error);
        }
    }
    let code = summary.exit_code();
    let written = summary.written.len();
    for failure in summary.failures {
        tracing::error!("{:#}", anyhow::Error::from(failure));
    }

    if !config.behavior.quiet {
        tracing::info!(
            "{} findings across {} sections, {} files written",
            summary.document.total_rows(),
            summary.document.sections.len(),
            written
        );
    }

    if code == exit_codes::ERROR && written == 0 {
        anyhow::bail!("no report could be written to {}", config.output.dir.display());
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ToolKind;
    use crate::reports::OutputFormat;

    #[test]
    fn test_generate_with_clean_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("artifacts");
        std::fs::create_dir_all(&input).unwrap();
        std::fs::write(input.join("safety-report.json"), r#"{"vulnerabilities": []}"#).unwrap();

        let config = AppConfig::builder()
            .input_dir(&input)
            .output_dir(dir.path().join("reports"))
            .tools(vec![ToolKind::Safety])
            .formats(vec![OutputFormat::Html])
            .quiet(true)
            .build();

        assert_eq!(run_generate(config).unwrap(), exit_codes::SUCCESS);
        assert!(dir.path().join("reports").join("security_report.html").is_file());
    }

    #[test]
    fn test_generate_fails_when_nothing_written() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("reports"), b"").unwrap();

        let config = AppConfig::builder()
            .input_dir(dir.path().join("artifacts"))
            .output_dir(dir.path().join("reports").join("sub"))
            .tools(vec![ToolKind::Safety])
            .formats(vec![OutputFormat::Json])
            .quiet(true)
            .build();

        let err = run_generate(config).unwrap_err();
        assert!(err.to_string().starts_with("no report could be written"));
    }
}
