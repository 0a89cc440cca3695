//! Configuration module for the Bolster MCP server.

mod settings;

pub use settings::*;
