//! Configuration management
//!
//! This module handles loading and saving the s3url configuration file.
//! The configuration file is stored in TOML format at ~/.config/s3url/config.toml.
//! Bumping `SCHEMA_VERSION` needs a matching step in `ConfigManager::migrate`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Current configuration schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Environment variable that overrides the configuration directory
pub const CONFIG_DIR_ENV: &str = "S3URL_CONFIG_DIR";

/// Default output format
const DEFAULT_OUTPUT: &str = "human";

/// Default color setting
const DEFAULT_COLOR: &str = "auto";

/// Default scheme for the short `s3://bucket/key` form
const DEFAULT_SCHEME: &str = "s3";

/// Endpoint URL schemes, which cannot double as the short-form scheme
const RESERVED_SCHEMES: &[&str] = &["http", "https", "ws", "wss", "ftp", "file"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for migration support
    pub schema_version: u32,

    /// Default settings
    #[serde(default)]
    pub defaults: Defaults,

    /// Address resolver settings
    #[serde(default)]
    pub resolver: ResolverConfig,
}

/// Default settings for CLI behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Output format: "human" or "json"
    #[serde(default = "default_output")]
    pub output: String,

    /// Color mode: "auto", "always", or "never"
    #[serde(default = "default_color")]
    pub color: String,
}

/// Knobs for the address resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Scheme that selects the short form, without the trailing "://"
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// Accepted provider domains, e.g. "amazonaws.com".
    /// Empty accepts any domain after the endpoint label.
    #[serde(default)]
    pub domains: Vec<String>,
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_scheme() -> String {
    DEFAULT_SCHEME.to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            domains: Vec::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            defaults: Defaults::default(),
            resolver: ResolverConfig::default(),
        }
    }
}

impl Config {
    /// Check values that serde cannot reject on its own
    pub fn check(&self) -> Result<()> {
        if !matches!(self.defaults.output.as_str(), "human" | "json") {
            return Err(Error::Config(format!(
                "Unknown output format '{}'. Use \"human\" or \"json\"",
                self.defaults.output
            )));
        }

        if !matches!(self.defaults.color.as_str(), "auto" | "always" | "never") {
            return Err(Error::Config(format!(
                "Unknown color mode '{}'. Use \"auto\", \"always\" or \"never\"",
                self.defaults.color
            )));
        }

        let scheme = &self.resolver.scheme;
        if scheme.is_empty()
            || !scheme
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "+-.".contains(c))
        {
            return Err(Error::Config(format!(
                "Invalid resolver scheme '{scheme}'. Use lowercase letters, digits, '+', '-' or '.'"
            )));
        }

        if RESERVED_SCHEMES.contains(&scheme.as_str()) {
            return Err(Error::Config(format!(
                "Resolver scheme '{scheme}' is reserved for endpoint URLs"
            )));
        }

        if let Some(domain) = self
            .resolver
            .domains
            .iter()
            .find(|d| d.is_empty() || d.split('.').any(str::is_empty))
        {
            return Err(Error::Config(format!(
                "Invalid resolver domain '{domain}'"
            )));
        }

        Ok(())
    }
}

/// Configuration manager handles loading and saving config
#[derive(Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with the default config path
    ///
    /// `S3URL_CONFIG_DIR` takes precedence over the platform config directory.
    pub fn new() -> Result<Self> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(Self::with_path(PathBuf::from(dir).join("config.toml")));
        }

        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".into()))?;
        let config_path = config_dir.join("s3url").join("config.toml");
        Ok(Self { config_path })
    }

    /// Create a ConfigManager with a custom path (useful for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the configuration file path
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Whether a configuration file exists at the managed path
    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    /// Load configuration from disk
    ///
    /// If the configuration file doesn't exist, returns a default configuration.
    pub fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&self.config_path)?;
        let mut config: Config = toml::from_str(&content)?;

        if config.schema_version < SCHEMA_VERSION {
            config = self.migrate(config)?;
        } else if config.schema_version > SCHEMA_VERSION {
            return Err(Error::Config(format!(
                "Configuration file version {} is newer than supported version {}. Please upgrade s3url.",
                config.schema_version, SCHEMA_VERSION
            )));
        }

        config.check()?;
        tracing::debug!(path = %self.config_path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to disk
    ///
    /// Creates parent directories if they don't exist.
    /// Sets file permissions to 600 (owner read/write only).
    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(config)?;
        std::fs::write(&self.config_path, content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&self.config_path, permissions)?;
        }

        Ok(())
    }

    /// Migrate configuration from older schema version
    fn migrate(&self, config: Config) -> Result<Config> {
        let mut config = config;

        // Version 0 files predate the [resolver] table, which serde already defaults.
        config.schema_version = SCHEMA_VERSION;
        Ok(config)
    }
}
