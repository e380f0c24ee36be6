//! CLI command definitions and execution
//!
//! This module contains all CLI commands and their implementations.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use s3url_core::ConfigManager;
use s3url_core::config::Defaults;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

mod completions;
mod config;
mod resolve;
mod validate;

/// s3url - resolve S3 object URLs
///
/// Accepts virtual-hosted, path-style and s3:// URLs and prints the bucket
/// and key they refer to.
#[derive(Parser, Debug)]
#[command(name = "s3url")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human-readable or JSON
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true, default_value = "false")]
    pub debug: bool,

    /// Path to the configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse and validate an S3 URL
    Resolve(resolve::ResolveArgs),

    /// Validate an explicit bucket/key pair
    Validate(validate::ValidateArgs),

    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(config::ConfigCommands),

    /// Generate shell completion scripts
    Completions(completions::CompletionsArgs),
}

/// Execute the CLI command and return an exit code
pub fn execute(cli: Cli) -> ExitCode {
    let manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => match ConfigManager::new() {
            Ok(manager) => manager,
            Err(e) => {
                Formatter::new(OutputConfig::from_flags(
                    cli.json,
                    cli.no_color,
                    cli.quiet,
                    &Defaults::default(),
                ))
                .error(&e.to_string());
                return ExitCode::from_error(&e);
            }
        },
    };

    // A broken config file must not prevent `config path` or `config init --force`.
    let loaded = manager.load();
    let defaults = loaded
        .as_ref()
        .map(|c| c.defaults.clone())
        .unwrap_or_default();

    let output_config = OutputConfig::from_flags(cli.json, cli.no_color, cli.quiet, &defaults);
    let formatter = Formatter::new(output_config);

    match cli.command {
        Commands::Completions(args) => completions::execute(args),
        Commands::Validate(args) => validate::execute(args, &formatter),
        Commands::Config(cmd) => config::execute(cmd, &manager, &formatter),
        Commands::Resolve(args) => match loaded {
            Ok(config) => resolve::execute(args, &config, &formatter),
            Err(e) => {
                formatter.error(&format!(
                    "Failed to load {}: {e}",
                    manager.config_path().display()
                ));
                ExitCode::from_error(&e)
            }
        },
    }
}
