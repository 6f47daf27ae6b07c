//! Runtime configuration
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! an optional TOML file (`--config`), and command-line flags (the URL can
//! also be given through `LISTMERGE_API_URL`).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

/// Endpoint used when nothing else is configured
pub const DEFAULT_API_URL: &str = "https://api.example.com/lists";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

const LOG_FILE_NAME: &str = "listmerge.log";
const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Command-line arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "listmerge")]
#[command(version, about = "Pick two lists from a list service and merge their items")]
pub struct Cli {
    /// List service endpoint
    #[arg(short, long, env = "LISTMERGE_API_URL")]
    pub url: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file (default: listmerge.log in the temp directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long)]
    pub log_level: Option<String>,
}

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid list service URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("timeout must be at least 1 second")]
    ZeroTimeout,

    #[error("unknown log level {0:?} (expected error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
}

/// Resolved settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub api_url: String,
    pub timeout_secs: u64,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    /// Build settings from defaults, the config file and CLI flags
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = match cli.config {
            Some(ref path) => Self::from_file(path)?,
            None => Self::default(),
        };
        settings.apply_cli(cli);
        settings.validate()?;
        Ok(settings)
    }

    /// Load a TOML config file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref url) = cli.url {
            self.api_url = url.clone();
        }
        if let Some(timeout) = cli.timeout {
            self.timeout_secs = timeout;
        }
        if let Some(ref path) = cli.log_file {
            self.log_file = Some(path.clone());
        }
        if let Some(ref level) = cli.log_level {
            self.log_level = level.clone();
        }
    }

    /// Check the URL, timeout and log level
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api_url()?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }
        Ok(())
    }

    /// Parsed endpoint; only http and https are accepted
    pub fn api_url(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidUrl {
            url: self.api_url.clone(),
            reason,
        };
        let url = Url::parse(&self.api_url).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme {other:?}"))),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Log file path, falling back to the temp directory
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME))
    }
}
