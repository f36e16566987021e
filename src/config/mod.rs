//! Configuration management for helpdesk
//!
//! Settings are layered with the `config` crate, lowest precedence first:
//!
//! 1. built-in defaults ([`Config::default`])
//! 2. a configuration file: the path passed with `--config`, or
//!    `<platform config dir>/helpdesk/config.toml` when it exists
//! 3. environment variables prefixed with `HELPDESK_`
//!    (for example `HELPDESK_DEFAULT_PRIORITY=high`)
//!
//! The file only tunes the terminal front-end; tickets are never stored in it.

use crate::core::Priority;
use crate::error::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Front-end settings for a helpdesk session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Priority preselected in the new-ticket form
    pub default_priority: Priority,

    /// Show the newest tickets first on the board
    pub newest_first: bool,

    /// Re-render statistics and the board after every change
    pub redraw_after_change: bool,

    /// Prompt shown before each session command
    pub prompt: String,

    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,

    /// Colored terminal output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_priority: Priority::Medium,
            newest_first: true,
            redraw_after_change: true,
            prompt: "helpdesk>".to_string(),
            log_level: "warn".to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Prefix of the environment variables that override settings
    pub const ENV_PREFIX: &'static str = "HELPDESK";

    /// Platform-specific location of the default configuration file
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "helpdesk").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from defaults, a file and the environment
    ///
    /// The file format follows its extension (TOML, YAML or JSON).
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given file is missing, if a file
    /// cannot be parsed, or if a value has the wrong type.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = explicit_path {
            builder = builder.add_source(config::File::from(path).required(true));
        } else if let Some(path) = Self::default_path() {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix(Self::ENV_PREFIX))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("write config file");
        path
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_priority, Priority::Medium);
        assert!(config.newest_first);
        assert!(config.redraw_after_change);
        assert_eq!(config.prompt, "helpdesk>");
    }

    #[test]
    #[serial]
    fn test_load_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "config.toml",
            "default_priority = \"high\"\nnewest_first = false\nprompt = \"desk>\"\n",
        );

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.default_priority, Priority::High);
        assert!(!config.newest_first);
        assert_eq!(config.prompt, "desk>");
        // untouched keys keep their defaults
        assert!(config.redraw_after_change);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    #[serial]
    fn test_load_yaml_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "config.yaml", "default_priority: low\ncolor: false\n");

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.default_priority, Priority::Low);
        assert!(!config.color);
    }

    #[test]
    #[serial]
    fn test_environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "config.toml", "default_priority = \"low\"\n");

        // SAFETY: serialized with every other test that touches the environment
        unsafe { std::env::set_var("HELPDESK_DEFAULT_PRIORITY", "high") };
        let config = Config::load(Some(&path));
        unsafe { std::env::remove_var("HELPDESK_DEFAULT_PRIORITY") };

        assert_eq!(config.unwrap().default_priority, Priority::High);
    }

    #[test]
    #[serial]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = Config::load(Some(&missing)).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    #[serial]
    fn test_invalid_value_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "config.toml", "default_priority = \"urgent\"\n");

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.is_config_error());
    }
}
