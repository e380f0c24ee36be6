//! Output formatting utilities
//!
//! This module provides formatters for CLI output in both human-readable
//! and JSON formats.

mod formatter;

pub use formatter::Formatter;

use s3url_core::config::Defaults;

/// Output configuration derived from CLI flags and config defaults
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Use JSON output format
    pub json: bool,
    /// Disable colored output
    pub no_color: bool,
    /// Suppress non-error output
    pub quiet: bool,
}

impl OutputConfig {
    /// Merge command-line flags over the configured defaults
    ///
    /// Flags can only switch JSON on and color off; the config file
    /// supplies the baseline.
    pub fn from_flags(json: bool, no_color: bool, quiet: bool, defaults: &Defaults) -> Self {
        let color_disabled = match defaults.color.as_str() {
            "always" => false,
            "never" => true,
            _ => std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
        };

        Self {
            json: json || defaults.output == "json",
            no_color: no_color || color_disabled,
            quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let defaults = Defaults::default();
        let config = OutputConfig::from_flags(true, true, true, &defaults);
        assert!(config.json);
        assert!(config.no_color);
        assert!(config.quiet);
    }

    #[test]
    fn test_defaults_apply_without_flags() {
        let defaults = Defaults {
            output: "json".to_string(),
            color: "never".to_string(),
        };
        let config = OutputConfig::from_flags(false, false, false, &defaults);
        assert!(config.json);
        assert!(config.no_color);
        assert!(!config.quiet);
    }

    #[test]
    fn test_always_color() {
        let defaults = Defaults {
            output: "human".to_string(),
            color: "always".to_string(),
        };
        let config = OutputConfig::from_flags(false, false, false, &defaults);
        assert!(!config.json);
        assert!(!config.no_color);
    }
}
