//! secscan-report: aggregate security scanner output into one report
//!
//! Reads Bandit, Semgrep, Pylint and Safety JSON output and writes a
//! consolidated HTML, PDF and/or JSON report.

#![allow(clippy::needless_pass_by_value)]

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use secscan_report::{
    cli,
    config::{AppConfig, MissingInputPolicy},
    model::ToolKind,
    pipeline::exit_codes,
    reports::OutputFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "secscan-report")]
#[command(version)]
#[command(about = "Aggregate security scanner JSON output into one report", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Report written, all inputs loaded cleanly
    1  Report written, but at least one tool had errors
    3  Error occurred

EXAMPLES:
    # Default layout: artifacts/*.json -> reports/security_report.{html,pdf}
    secscan-report generate

    # CI: JSON and HTML only, leave out tools that did not run
    secscan-report generate --format json --format html --omit-missing

    # Start a config file
    secscan-report init-config -o .secscan-report.yaml")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Arguments for the `generate` subcommand
#[derive(Args, Default)]
struct GenerateArgs {
    /// Directory containing the scanner JSON files
    #[arg(short, long, env = "SECSCAN_INPUT_DIR")]
    input_dir: Option<PathBuf>,

    /// Directory the reports are written to
    #[arg(short, long, env = "SECSCAN_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Output format (repeatable)
    #[arg(short, long = "format", value_enum)]
    formats: Vec<OutputFormat>,

    /// Tool to include, in report order (repeatable)
    #[arg(short, long = "tool", value_enum)]
    tools: Vec<ToolKind>,

    /// Report title
    #[arg(long)]
    title: Option<String>,

    /// Pin the generation timestamp (RFC 3339) for reproducible output
    #[arg(long)]
    timestamp: Option<String>,

    /// Leave tools with a missing input file out of the report
    #[arg(long)]
    omit_missing: bool,
}

impl GenerateArgs {
    /// CLI values as a config layered over the file config
    fn overrides(&self, quiet: bool) -> AppConfig {
        let mut builder = AppConfig::builder().quiet(quiet);
        if let Some(dir) = &self.input_dir {
            builder = builder.input_dir(dir);
        }
        if let Some(dir) = &self.output_dir {
            builder = builder.output_dir(dir);
        }
        if !self.formats.is_empty() {
            builder = builder.formats(self.formats.clone());
        }
        if !self.tools.is_empty() {
            builder = builder.tools(self.tools.clone());
        }
        if let Some(title) = &self.title {
            builder = builder.title(title.clone());
        }
        if let Some(ts) = &self.timestamp {
            builder = builder.timestamp(ts.clone());
        }
        if self.omit_missing {
            builder = builder.missing_input(MissingInputPolicy::Omit);
        }
        builder.build()
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build the report from scanner output (default)
    Generate(GenerateArgs),

    /// Print or write an example configuration file
    InitConfig {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print only the default values, without comments
        #[arg(long)]
        minimal: bool,
    },

    /// Generate JSON Schema for the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let code = match dispatch(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

fn dispatch(cli: Cli) -> Result<i32> {
    let command = cli.command.unwrap_or_else(|| {
        // clap only reads `env` fallbacks when the subcommand is parsed
        Commands::Generate(GenerateArgs {
            input_dir: std::env::var_os("SECSCAN_INPUT_DIR").map(PathBuf::from),
            output_dir: std::env::var_os("SECSCAN_OUTPUT_DIR").map(PathBuf::from),
            ..GenerateArgs::default()
        })
    });
    match command {
        Commands::Generate(args) => {
            let overrides = args.overrides(cli.quiet);
            let (config, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            if let Some(path) = &loaded_from {
                tracing::debug!("Loaded config from {}", path.display());
            }
            cli::run_generate(config)
        }

        Commands::InitConfig { output, minimal } => {
            cli::run_init_config(output.as_deref(), minimal)?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Schema { output } => {
            cli::run_schema(output.as_deref())?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "secscan-report", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
    }
}
