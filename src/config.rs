//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::notice::NoticeTimings;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub notices: NoticeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Activities endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// How long notices stay visible
#[derive(Debug, Clone, Deserialize)]
pub struct NoticeConfig {
    #[serde(default = "default_signup_secs")]
    pub signup_secs: u64,

    #[serde(default = "default_removal_secs")]
    pub removal_secs: u64,
}

fn default_signup_secs() -> u64 {
    5
}

fn default_removal_secs() -> u64 {
    4
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            signup_secs: default_signup_secs(),
            removal_secs: default_removal_secs(),
        }
    }
}

impl NoticeConfig {
    pub fn timings(&self) -> NoticeTimings {
        NoticeTimings {
            signup: Duration::from_secs(self.signup_secs),
            removal: Duration::from_secs(self.removal_secs),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Standard config file locations, in search order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("activity-signup").join("config.toml")),
            Some(PathBuf::from("./signup.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let (config, report) = Self::load_default_with_report();
        report.log();
        config
    }

    /// Like [`Config::load_default`], but hands back what happened instead of
    /// logging it, for callers that set up logging from the result.
    pub fn load_default_with_report() -> (Self, LoadReport) {
        Self::load_first(&Self::default_paths())
    }

    /// Load the first existing file in `paths` that parses, else env only
    pub fn load_first(paths: &[PathBuf]) -> (Self, LoadReport) {
        let mut report = LoadReport::default();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    report.source = Some(path.clone());
                    return (config, report);
                }
                Err(e) => report.errors.push(e),
            }
        }

        (Self::from_env(), report)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("SIGNUP_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(timeout) = std::env::var("SIGNUP_REQUEST_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.api.request_timeout_secs = t;
            }
        }

        if let Ok(level) = std::env::var("SIGNUP_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SIGNUP_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Where a config came from and which files were skipped
#[derive(Debug, Default)]
pub struct LoadReport {
    /// File the config was read from; `None` means defaults plus environment
    pub source: Option<PathBuf>,
    /// Files that existed but could not be loaded
    pub errors: Vec<ConfigError>,
}

impl LoadReport {
    pub fn from_path(path: &Path) -> Self {
        Self {
            source: Some(path.to_path_buf()),
            errors: Vec::new(),
        }
    }

    pub fn log(&self) {
        for e in &self.errors {
            tracing::warn!("Skipping config file: {}", e);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::debug!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Activity Signup Configuration
#
# Environment variables override these settings:
# - SIGNUP_API_URL
# - SIGNUP_REQUEST_TIMEOUT_SECS
# - SIGNUP_LOG_LEVEL
# - SIGNUP_LOG_FORMAT

[api]
# Base URL of the activities server
base_url = "http://localhost:8000"

# Request timeout in seconds
request_timeout_secs = 10

[notices]
# Seconds a signup message stays visible
signup_secs = 5

# Seconds an unregister message stays visible
removal_secs = 4

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
