//! Configuration management and validation.
//!
//! Provides the loader, search and logging settings used by the CLI. Values are
//! layered: built-in defaults, then an optional JSON config file, then command
//! line overrides, followed by a final [`Config::validate`].

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_DATA_SOURCE,
    DEFAULT_SEARCH_LIMIT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Log levels accepted in the config file
const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub loader: LoaderConfig,
    pub search: SearchConfig,
    pub logging: LoggingConfig,
}

/// Where and how the raw dataset is fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// HTTP(S) URL or local path of the station JSON array
    pub source: String,

    /// Whole-request timeout in seconds
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds
    pub connect_timeout_secs: u64,

    pub user_agent: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_DATA_SOURCE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of results printed by `search`
    pub default_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level emitted (error, warn, info, debug, trace)
    pub level: String,

    /// Compact output without timestamps
    pub quiet: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            quiet: false,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file '{}'", path.display()),
                e,
            )
        })?;

        let config: Self = serde_json::from_str(&contents).map_err(|e| {
            Error::configuration(format!(
                "Invalid config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Platform config location, e.g. `~/.config/station-reviews/config.json`
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine config directory"))
    }

    /// Load from `path` if given, otherwise from the default location when it exists
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_config_path() {
                Ok(default_path) if default_path.exists() => Self::from_file(&default_path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Check that all values are usable
    pub fn validate(&self) -> Result<()> {
        if self.loader.source.trim().is_empty() {
            return Err(Error::configuration("Data source must not be empty"));
        }
        if self.loader.timeout_secs == 0 {
            return Err(Error::configuration("Timeout must be greater than zero"));
        }
        if self.loader.connect_timeout_secs == 0 {
            return Err(Error::configuration(
                "Connect timeout must be greater than zero",
            ));
        }
        if self.search.default_limit == 0 {
            return Err(Error::configuration(
                "Search limit must be greater than zero",
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "Unknown log level '{}', expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    /// Use a different data source
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.loader.source = source.into();
        self
    }

    /// Use a custom request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.loader.timeout_secs = timeout_secs;
        self
    }

    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search.default_limit = limit;
        self
    }

    /// Set the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    pub fn with_quiet(mut self) -> Self {
        self.logging.quiet = true;
        self
    }
}
