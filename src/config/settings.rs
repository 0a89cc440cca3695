//! Configuration settings for the Bolster MCP server.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub calendar: CalendarConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            calendar: CalendarConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::ReadFile)?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations or use defaults.
    pub fn load() -> Result<Self> {
        let config_paths = [
            // Current directory
            PathBuf::from("bolster.toml"),
            PathBuf::from("config.toml"),
            // User config directory
            dirs::config_dir()
                .map(|p| p.join("bolster-mcp/config.toml"))
                .unwrap_or_default(),
            // Home directory
            dirs::home_dir()
                .map(|p| p.join(".bolster-mcp/config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.calendar.feed_url.is_empty() {
            return Err(ConfigError::MissingField("calendar.feed_url".to_string()).into());
        }
        if self.calendar.fetch_timeout_secs == 0 {
            return Err(
                ConfigError::Invalid("fetch_timeout_secs must be > 0".to_string()).into(),
            );
        }
        if self.calendar.default_days_ahead == 0 || self.calendar.default_days_ahead > 365 {
            return Err(
                ConfigError::Invalid("default_days_ahead must be in 1..=365".to_string()).into(),
            );
        }
        Ok(())
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Transport type: "stdio" or "http"
    pub transport: TransportType,
    /// HTTP port (only used when transport is "http")
    pub http_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: TransportType::Stdio,
            http_port: 8080,
        }
    }
}

/// Transport type enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    Stdio,
    Http,
}

/// Calendar availability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Public iCal feed URL to check availability against.
    pub feed_url: String,
    /// Total request timeout for fetching the feed, in seconds.
    pub fetch_timeout_secs: u64,
    /// Default number of days to check ahead when the caller omits it.
    pub default_days_ahead: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            feed_url:
                "https://calendar.google.com/calendar/ical/andrew.bolster%40gmail.com/public/basic.ics"
                    .to_string(),
            fetch_timeout_secs: 10,
            default_days_ahead: 7,
        }
    }
}
