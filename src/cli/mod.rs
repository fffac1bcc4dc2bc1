//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod config;
mod generate;

pub use config::{run_init_config, run_schema};
pub use generate::run_generate;

// Re-export config types used by handlers
pub use crate::config::AppConfig;
