// Rust guideline compliant 2026-10-16

//! Configuration management for Buildgate.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Name of the configuration file at the repository root.
pub const CONFIG_FILE: &str = "buildgate.toml";

/// Configuration for the pre-commit gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Command that runs the unit-test suite.
    #[serde(default = "default_test_command")]
    pub test_command: Vec<String>,

    /// External build incrementer. The built-in incrementer is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bump_command: Option<Vec<String>>,

    /// Version file holding the build number, relative to the repository root.
    #[serde(default = "default_version_file")]
    pub version_file: PathBuf,

    /// Key of the build-number line in the version file.
    #[serde(default = "default_build_key")]
    pub build_key: String,
}

fn default_test_command() -> Vec<String> {
    vec!["cargo".to_string(), "test".to_string()]
}

fn default_version_file() -> PathBuf {
    PathBuf::from("src/version.py")
}

fn default_build_key() -> String {
    "BUILD".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            test_command: default_test_command(),
            bump_command: None,
            version_file: default_version_file(),
            build_key: default_build_key(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `buildgate.toml` in the repository root
    /// 3. Environment variables with `BUILDGATE_` prefix
    ///
    /// # Arguments
    ///
    /// * `root` - Repository work-tree root
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("{}: {}", config_path.display(), e)))?;
            debug!(path = %config_path.display(), "loaded config file");
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `BUILDGATE_TEST_COMMAND` - Test command, split on whitespace
    /// - `BUILDGATE_BUMP_COMMAND` - Bump command, split on whitespace
    /// - `BUILDGATE_VERSION_FILE` - Version file path
    /// - `BUILDGATE_BUILD_KEY` - Build-number key
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("BUILDGATE_TEST_COMMAND") {
            self.test_command = split_command(&val);
        }

        if let Ok(val) = std::env::var("BUILDGATE_BUMP_COMMAND") {
            self.bump_command = Some(split_command(&val));
        }

        if let Ok(val) = std::env::var("BUILDGATE_VERSION_FILE") {
            self.version_file = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("BUILDGATE_BUILD_KEY") {
            self.build_key = val;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `test_command` or a configured `bump_command` is empty
    /// - `version_file` is absolute, escapes the repository or starts with `.`
    /// - `build_key` is empty or contains whitespace or `=`
    fn validate(&self) -> Result<()> {
        if self.test_command.is_empty() {
            return Err(Error::Config("test_command must not be empty".to_string()));
        }

        if matches!(&self.bump_command, Some(cmd) if cmd.is_empty()) {
            return Err(Error::Config(
                "bump_command must not be empty when set".to_string(),
            ));
        }

        // Git only accepts plain repository-relative paths when staging.
        let plain = self
            .version_file
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if self.version_file.as_os_str().is_empty() || !plain {
            return Err(Error::Config(format!(
                "version_file must be a plain path inside the repository, got '{}'",
                self.version_file.display()
            )));
        }

        if self.build_key.is_empty()
            || self
                .build_key
                .chars()
                .any(|c| c.is_whitespace() || c == '=')
        {
            return Err(Error::Config(format!(
                "build_key must be a single word without '=', got '{}'",
                self.build_key
            )));
        }

        Ok(())
    }

    /// Saves the configuration to `buildgate.toml` in `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, root: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(root.join(CONFIG_FILE), content)?;
        Ok(())
    }
}

fn split_command(val: &str) -> Vec<String> {
    val.split_whitespace().map(str::to_string).collect()
}
