//! Error types for the Bolster MCP server.

use thiserror::Error;

/// Main error type for Bolster MCP operations.
#[derive(Error, Debug)]
pub enum BolsterError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Availability error: {0}")]
    Availability(#[from] AvailabilityError),

    #[error("MCP error: {0}")]
    Mcp(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Errors from the calendar availability pipeline.
///
/// `Fetch` and `Processing` are recovered locally into user-readable text
/// by the renderer; only `InvalidInput` reaches the caller as an error.
#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to fetch calendar feed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Failed to process calendar data: {0}")]
    Processing(String),
}

/// Result type alias for Bolster MCP operations.
pub type Result<T> = std::result::Result<T, BolsterError>;
