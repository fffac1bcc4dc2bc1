//! Input loading.
//!
//! Reading a tool's JSON output never aborts the run: every outcome is a
//! tagged [`LoadOutcome`] that the aggregator turns into a finding set.

use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Maximum input file size (64 MB). Scanner reports are far smaller in practice.
pub const MAX_INPUT_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Why an input could not be loaded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadErrorKind {
    #[error("input file not found")]
    NotFound,

    #[error("malformed JSON ({0})")]
    ParseError(String),

    #[error("input file unreadable ({0})")]
    Unreadable(String),
}

/// A recoverable failure to load one tool's input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {}", path.display())]
pub struct LoadError {
    pub path: PathBuf,
    pub kind: LoadErrorKind,
}

impl LoadError {
    /// Create a load error for a path
    pub fn new(path: impl Into<PathBuf>, kind: LoadErrorKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Whether the input was simply absent
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == LoadErrorKind::NotFound
    }
}

/// Result of loading one input
pub type LoadOutcome = Result<Value, LoadError>;

/// Read and parse one JSON input file.
///
/// Performs exactly one file read. Oversized files are rejected before
/// reading.
pub fn load(path: &Path) -> LoadOutcome {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, &e))?;
    if metadata.is_dir() {
        return Err(LoadError::new(
            path,
            LoadErrorKind::Unreadable("path is a directory".to_string()),
        ));
    }
    if metadata.len() > MAX_INPUT_FILE_SIZE {
        return Err(LoadError::new(
            path,
            LoadErrorKind::Unreadable(format!(
                "file is {} MB, exceeding the {} MB limit",
                metadata.len() / (1024 * 1024),
                MAX_INPUT_FILE_SIZE / (1024 * 1024),
            )),
        ));
    }

    let bytes = std::fs::read(path).map_err(|e| io_error(path, &e))?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
    load_slice(&bytes).map_err(|kind| LoadError::new(path, kind))
}

/// Parse JSON from in-memory bytes
pub fn load_slice(bytes: &[u8]) -> Result<Value, LoadErrorKind> {
    serde_json::from_slice(bytes).map_err(|e| LoadErrorKind::ParseError(e.to_string()))
}

/// Parse JSON from a string
pub fn load_str(content: &str) -> Result<Value, LoadErrorKind> {
    load_slice(content.as_bytes())
}

fn io_error(path: &Path, err: &std::io::Error) -> LoadError {
    let kind = if err.kind() == std::io::ErrorKind::NotFound {
        LoadErrorKind::NotFound
    } else {
        LoadErrorKind::Unreadable(err.to_string())
    };
    LoadError::new(path, kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"results": []}}"#).unwrap();

        let value = load(file.path()).unwrap();
        assert_eq!(value, serde_json::json!({"results": []}));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("bandit-report.json")).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("input file not found: "));
        assert!(err.to_string().ends_with("bandit-report.json"));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = load(file.path()).unwrap_err();
        assert!(matches!(err.kind, LoadErrorKind::ParseError(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err.kind, LoadErrorKind::Unreadable(_)));
    }

    #[test]
    fn test_load_str() {
        assert!(load_str("[]").is_ok());
        assert!(matches!(load_str(""), Err(LoadErrorKind::ParseError(_))));
    }
}
