//! Result renderer: pure formatting of availability outcomes.
//!
//! Every outcome, including failure, renders to displayable text so the
//! caller always has something to relay verbatim.

use std::fmt::Display;

use super::extract::CalendarEvent;
use super::window::QueryWindow;

/// Placeholder label for events with no summary.
const DEFAULT_SUMMARY: &str = "Busy";

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Render the availability summary for a window and its filtered events.
pub fn render_schedule(window: &QueryWindow, events: &[CalendarEvent]) -> String {
    let start = window.start.format(DATE_FORMAT);
    let end = window.end.format(DATE_FORMAT);

    if events.is_empty() {
        return format!(
            "Calendar availability for {start} to {end}:\n\n\
             ✅ No scheduled events found in the public calendar for this period.\n\n\
             Note: This shows only publicly visible calendar events. Private events \
             and detailed scheduling should be confirmed directly."
        );
    }

    let event_list: Vec<String> = events
        .iter()
        .map(|event| {
            format!(
                "  📅 {} - {}: {}",
                event.start.format(DATETIME_FORMAT),
                event.end.format(DATETIME_FORMAT),
                event.summary.as_deref().unwrap_or(DEFAULT_SUMMARY),
            )
        })
        .collect();

    format!(
        "Calendar availability for {start} to {end}:\n\n\
         ⚠️  Scheduled events found:\n{}\n\n\
         Note: This shows only publicly visible calendar events. For detailed \
         scheduling or to check additional availability, please use the contact \
         tool to reach out directly.",
        event_list.join("\n")
    )
}

/// Render a fetch-level failure (network or HTTP status).
pub fn render_fetch_error(cause: &impl Display) -> String {
    format!("Error fetching calendar data: {cause}. Please try again later or contact directly.")
}

/// Render any other processing failure.
pub fn render_processing_error(cause: &impl Display) -> String {
    format!("Error processing calendar information: {cause}. Please contact directly for availability.")
}
