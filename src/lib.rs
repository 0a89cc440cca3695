//! Bolster MCP: curated resources about Andrew Bolster.
//!
//! A Rust MCP server exposing static biographical and professional
//! resources about Andrew Bolster together with two tools: contact
//! message submission and public-calendar availability lookup.

pub mod calendar;
pub mod config;
pub mod contact;
pub mod error;
pub mod mcp;
pub mod profile;

pub use calendar::{
    evaluate_feed, extract_events, AvailabilityChecker, CalendarEvent, FeedFetcher, QueryWindow,
};
pub use config::Config;
pub use contact::ContactReceipt;
pub use error::{AvailabilityError, BolsterError, ConfigError, Result};
pub use mcp::{run_server, BolsterServer};
pub use profile::ProfileResource;
