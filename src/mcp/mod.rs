//! MCP server module for Bolster MCP.

mod server;
mod transport;

pub use server::*;
pub use transport::*;
