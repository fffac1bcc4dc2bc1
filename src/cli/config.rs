//! Configuration command handlers: `init-config` and `schema`.

use crate::config::{generate_example_config, generate_full_example_config, generate_json_schema};
use anyhow::{Context, Result};
use std::path::Path;

/// Print or write an example configuration file.
///
/// Refuses to overwrite an existing file.
pub fn run_init_config(output: Option<&Path>, minimal: bool) -> Result<()> {
    let content = if minimal {
        generate_example_config()
    } else {
        generate_full_example_config()
    };

    match output {
        Some(path) => {
            if path.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    path.display()
                );
            }
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Created {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}

/// Print or write the JSON schema of the configuration file
pub fn run_schema(output: Option<&Path>) -> Result<()> {
    let schema = generate_json_schema();
    match output {
        Some(path) => {
            std::fs::write(path, &schema)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Schema written to {}", path.display());
        }
        None => println!("{schema}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_file;

    #[test]
    fn test_init_config_writes_loadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".secscan-report.yaml");
        run_init_config(Some(&path), false).unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config, crate::config::AppConfig::default());
    }

    #[test]
    fn test_init_config_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".secscan-report.yaml");
        std::fs::write(&path, "tools: [bandit]\n").unwrap();

        assert!(run_init_config(Some(&path), true).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "tools: [bandit]\n");
    }

    #[test]
    fn test_schema_written_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        run_schema(Some(&path)).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(value.get("properties").is_some());
    }
}
