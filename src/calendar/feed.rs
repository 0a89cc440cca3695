//! Feed fetcher: retrieves the raw iCal text from the public calendar URL.

use std::time::Duration;

use tracing::debug;

use crate::config::CalendarConfig;
use crate::error::AvailabilityError;

/// Fetches the raw calendar feed over HTTP with a bounded timeout.
///
/// Performs a single GET per call. Non-success HTTP statuses and
/// network-level failures (DNS, connection, timeout) are folded into the
/// same [`AvailabilityError::Fetch`] kind; there is no retry.
#[derive(Clone)]
pub struct FeedFetcher {
    client: reqwest::Client,
    url: String,
}

impl FeedFetcher {
    /// Create a fetcher for the given feed URL with a total request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, AvailabilityError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Create a fetcher from calendar configuration.
    pub fn from_config(config: &CalendarConfig) -> Result<Self, AvailabilityError> {
        Self::new(
            &config.feed_url,
            Duration::from_secs(config.fetch_timeout_secs),
        )
    }

    /// The feed URL this fetcher targets.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the raw feed body.
    pub async fn fetch(&self) -> Result<String, AvailabilityError> {
        debug!(url = %self.url, "Fetching calendar feed");
        let response = self.client.get(&self.url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        debug!(bytes = body.len(), "Fetched calendar feed");
        Ok(body)
    }
}
