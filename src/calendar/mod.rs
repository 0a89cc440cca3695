//! Calendar availability evaluation over a public iCal feed.
//!
//! The pipeline runs in sequential stages:
//!
//! - **Feed Fetcher** ([`FeedFetcher`]): one bounded-timeout HTTP GET for the
//!   raw feed text, no retries.
//! - **Event Extractor** ([`extract_events`]): accumulator-based line scanner
//!   pulling `DTSTART`/`DTEND`/`SUMMARY` out of `VEVENT` blocks. All other
//!   iCalendar constructs (recurrence rules, timezone blocks, alarms) are
//!   ignored.
//! - **Window Filter** ([`QueryWindow`], [`events_in_window`]): inclusive
//!   overlap test against the requested date window, stable ascending sort.
//! - **Result Renderer** ([`render`]): human-readable summary text for the
//!   "no events", "events found", and failure outcomes.
//!
//! [`AvailabilityChecker`] drives the stages end to end. Fetch and processing
//! failures are rendered into displayable text rather than surfaced as
//! errors; only invalid caller input is returned as an error.
//!
//! Known limitation: UTC-suffixed (`…Z`) and naive feed timestamps both parse
//! into [`chrono::NaiveDateTime`] with no timezone reconciliation. See
//! [`extract`] for details.

pub mod availability;
pub mod extract;
pub mod feed;
pub mod render;
pub mod window;

pub use availability::{evaluate_feed, AvailabilityChecker};
pub use extract::{extract_events, CalendarEvent};
pub use feed::FeedFetcher;
pub use window::{events_in_window, QueryWindow};
