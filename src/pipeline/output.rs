//! Output file writing.

use crate::error::{ErrorContext, Result, ScanReportError};
use std::path::Path;

/// Create the output directory if it does not exist yet
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dir)
        .map_err(|e| ScanReportError::io(dir, e))
        .context("creating output directory")?;
    tracing::debug!("Created output directory {}", dir.display());
    Ok(())
}

/// Write a rendered report to its file in a single write call
pub fn write_output(path: &Path, bytes: &[u8], quiet: bool) -> Result<()> {
    std::fs::write(path, bytes)
        .map_err(|e| ScanReportError::io(path, e))
        .with_context(|| format!("writing {} bytes", bytes.len()))?;
    if !quiet {
        tracing::info!("Report written to {}", path.display());
    }
    Ok(())
}
