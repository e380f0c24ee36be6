//! Configuration commands
//!
//! Show where the configuration lives, print the effective settings, or
//! write a default file to edit.

use anyhow::Context;
use clap::Subcommand;
use s3url_core::{Config, ConfigManager};

use crate::exit_code::ExitCode;
use crate::output::Formatter;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the configuration file path
    Path,

    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init(InitArgs),
}

/// Arguments for the `config init` command
#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Execute a config subcommand
pub fn execute(cmd: ConfigCommands, manager: &ConfigManager, formatter: &Formatter) -> ExitCode {
    match cmd {
        ConfigCommands::Path => {
            let path = manager.config_path().display().to_string();
            if formatter.is_json() {
                formatter.json(&serde_json::json!({ "path": path }));
            } else {
                formatter.println(&path);
            }
            ExitCode::Success
        }
        ConfigCommands::Show => match manager.load() {
            Ok(config) => {
                show(&config, formatter);
                ExitCode::Success
            }
            Err(e) => {
                formatter.error(&format!(
                    "Failed to load {}: {e}",
                    manager.config_path().display()
                ));
                ExitCode::from_error(&e)
            }
        },
        ConfigCommands::Init(args) => init(args, manager, formatter),
    }
}

fn show(config: &Config, formatter: &Formatter) {
    if formatter.is_json() {
        formatter.json(config);
        return;
    }

    match toml::to_string_pretty(config) {
        Ok(content) => formatter.println(content.trim_end()),
        Err(e) => formatter.error(&format!("Failed to render configuration: {e}")),
    }
}

fn init(args: InitArgs, manager: &ConfigManager, formatter: &Formatter) -> ExitCode {
    match write_default(manager, args.force) {
        Ok(path) => {
            tracing::info!(path = %path, "wrote default configuration");
            if formatter.is_json() {
                formatter.json(&serde_json::json!({ "path": path, "created": true }));
            } else {
                formatter.success(&format!("Wrote default configuration to {path}"));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("{e:#}"));
            exit_code_for(&e)
        }
    }
}

/// Save a default config, returning the path written
fn write_default(manager: &ConfigManager, force: bool) -> anyhow::Result<String> {
    let path = manager.config_path().display().to_string();

    if manager.exists() && !force {
        anyhow::bail!("Configuration file already exists: {path}. Use --force to overwrite");
    }

    manager
        .save(&Config::default())
        .with_context(|| format!("Failed to write {path}"))?;
    Ok(path)
}

/// Core errors keep their own exit code; anything else is a usage problem
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .downcast_ref::<s3url_core::Error>()
        .map_or(ExitCode::UsageError, ExitCode::from_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputConfig;
    use tempfile::TempDir;

    fn setup() -> (ConfigManager, Formatter, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("s3url").join("config.toml"));
        let formatter = Formatter::new(OutputConfig {
            quiet: true,
            no_color: true,
            ..Default::default()
        });
        (manager, formatter, temp_dir)
    }

    #[test]
    fn test_init_writes_default() {
        let (manager, formatter, _temp_dir) = setup();

        let code = init(InitArgs { force: false }, &manager, &formatter);
        assert_eq!(code, ExitCode::Success);
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let (manager, formatter, _temp_dir) = setup();
        std::fs::create_dir_all(manager.config_path().parent().unwrap()).unwrap();
        std::fs::write(manager.config_path(), "schema_version = 1\n").unwrap();

        let code = init(InitArgs { force: false }, &manager, &formatter);
        assert_eq!(code, ExitCode::UsageError);

        let content = std::fs::read_to_string(manager.config_path()).unwrap();
        assert_eq!(content, "schema_version = 1\n");
    }

    #[test]
    fn test_init_force_replaces_broken_file() {
        let (manager, formatter, _temp_dir) = setup();
        std::fs::create_dir_all(manager.config_path().parent().unwrap()).unwrap();
        std::fs::write(manager.config_path(), "not toml [").unwrap();
        assert!(manager.load().is_err());

        let code = init(InitArgs { force: true }, &manager, &formatter);
        assert_eq!(code, ExitCode::Success);
        assert!(manager.load().is_ok());
    }

    #[test]
    fn test_write_failure_keeps_core_exit_code() {
        let (_, formatter, temp_dir) = setup();
        // The parent "directory" is a regular file, so saving fails with an IO error.
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let manager = ConfigManager::with_path(blocker.join("config.toml"));

        let err = write_default(&manager, false).unwrap_err();
        assert!(format!("{err:#}").starts_with("Failed to write"));
        assert_eq!(exit_code_for(&err), ExitCode::GeneralError);

        let code = init(InitArgs { force: false }, &manager, &formatter);
        assert_eq!(code, ExitCode::GeneralError);
    }

    #[test]
    fn test_show_reports_broken_file() {
        let (manager, formatter, _temp_dir) = setup();
        std::fs::create_dir_all(manager.config_path().parent().unwrap()).unwrap();
        std::fs::write(manager.config_path(), "schema_version = 99\n").unwrap();

        let code = execute(ConfigCommands::Show, &manager, &formatter);
        assert_eq!(code, ExitCode::UsageError);
    }
}
