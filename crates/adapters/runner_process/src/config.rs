//! Process runner configuration — TOML with environment variable overrides.
//!
//! Every field has a default so the file is optional. Environment variables
//! take precedence over file values.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

/// Configuration for [`ProcessScriptRunner`](crate::ProcessScriptRunner).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProcessRunnerConfig {
    /// Program and leading arguments, e.g. `["node", "runner.js"]`.
    pub command: Vec<String>,
    /// Upper bound for one script run, in seconds.
    pub timeout_secs: u64,
}

impl Default for ProcessRunnerConfig {
    fn default() -> Self {
        Self {
            command: vec!["hookline-script".to_string()],
            timeout_secs: 30,
        }
    }
}

impl ProcessRunnerConfig {
    /// Load from `path` (if present) then apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if the resulting configuration is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// Read a TOML file; a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] or [`ConfigError::Parse`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HOOKLINE_RUNNER_COMMAND") {
            self.command = val.split_whitespace().map(String::from).collect();
        }
        if let Ok(val) = std::env::var("HOOKLINE_RUNNER_TIMEOUT_SECS")
            && let Ok(secs) = val.parse()
        {
            self.timeout_secs = secs;
        }
    }

    /// Check that the configuration can drive a runner.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for an empty command or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.command.first().is_none_or(String::is_empty) {
            return Err(ConfigError::Validation(
                "command must name a program".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "timeout_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
