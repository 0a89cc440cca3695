//! Availability checker: drives the fetch → extract → filter → render
//! pipeline for a single request.

use tracing::{debug, warn};

use crate::config::CalendarConfig;
use crate::error::{AvailabilityError, BolsterError, Result};

use super::extract::extract_events;
use super::feed::FeedFetcher;
use super::render;
use super::window::{events_in_window, QueryWindow};

/// Evaluate a fetched feed body against a query window.
///
/// Pure function of the feed bytes and the window: calling it twice with the
/// same inputs yields identical text.
pub fn evaluate_feed(feed: &str, window: &QueryWindow) -> String {
    let events = extract_events(feed);
    debug!(extracted = events.len(), "Extracted events from feed");
    let relevant = events_in_window(events, window);
    debug!(relevant = relevant.len(), "Events overlapping query window");
    render::render_schedule(window, &relevant)
}

/// Checks calendar availability against the configured public feed.
///
/// One fetch per invocation, no shared state across requests. Fetch and
/// processing failures are recovered into rendered error text; only invalid
/// caller input surfaces as an error.
#[derive(Clone)]
pub struct AvailabilityChecker {
    fetcher: FeedFetcher,
    default_days_ahead: u32,
}

impl AvailabilityChecker {
    /// Build a checker from calendar configuration.
    pub fn new(config: &CalendarConfig) -> std::result::Result<Self, AvailabilityError> {
        Ok(Self {
            fetcher: FeedFetcher::from_config(config)?,
            default_days_ahead: config.default_days_ahead,
        })
    }

    /// Build a checker around an existing fetcher.
    pub fn with_fetcher(fetcher: FeedFetcher, default_days_ahead: u32) -> Self {
        Self {
            fetcher,
            default_days_ahead,
        }
    }

    /// Check availability for the requested window and return displayable
    /// text for every outcome except invalid input.
    pub async fn check(
        &self,
        start_date: Option<&str>,
        days_ahead: Option<u32>,
    ) -> Result<String> {
        let days = days_ahead.unwrap_or(self.default_days_ahead);
        let window =
            QueryWindow::starting(start_date, days).map_err(BolsterError::Availability)?;

        let feed = match self.fetcher.fetch().await {
            Ok(body) => body,
            Err(err @ AvailabilityError::Fetch(_)) => {
                warn!(url = %self.fetcher.url(), error = %err, "Calendar feed fetch failed");
                return Ok(render::render_fetch_error(&err));
            }
            Err(err) => {
                warn!(error = %err, "Calendar feed retrieval failed");
                return Ok(render::render_processing_error(&err));
            }
        };

        Ok(evaluate_feed(&feed, &window))
    }
}
