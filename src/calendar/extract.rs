//! Event extractor: line scanner over raw iCalendar text.
//!
//! Extraction is deliberately best-effort rather than a full grammar: the
//! feed is scanned line by line with a single "currently open event"
//! accumulator, and only the `BEGIN:VEVENT` / `END:VEVENT` / `DTSTART` /
//! `DTEND` / `SUMMARY` subset is recognized. Malformed timestamp values are
//! logged and skipped, leaving the field unset.
//!
//! Known limitation: `…Z` (UTC) and naive timestamp values are both parsed
//! into [`NaiveDateTime`] without reconciling them to a common zone. The
//! source feed mixes the two forms and the original consumer treated them
//! identically, so the ambiguity is preserved here rather than silently
//! "fixed" by assuming UTC.

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use tracing::debug;

const BEGIN_EVENT: &str = "BEGIN:VEVENT";
const END_EVENT: &str = "END:VEVENT";

/// A usable calendar event: both timestamps present, summary optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Event label; rendered with a placeholder when absent.
    pub summary: Option<String>,
}

/// Partially built event while its `VEVENT` block is still open.
#[derive(Debug, Default)]
struct OpenEvent {
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    summary: Option<String>,
}

impl OpenEvent {
    /// Close the accumulator into a usable event, discarding it when either
    /// timestamp never parsed.
    fn finish(self) -> Option<CalendarEvent> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(CalendarEvent {
                start,
                end,
                summary: self.summary,
            }),
            _ => None,
        }
    }
}

fn dtstart_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"DTSTART[^:]*:(\d{8}T?\d{0,6}Z?)").unwrap())
}

fn dtend_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"DTEND[^:]*:(\d{8}T?\d{0,6}Z?)").unwrap())
}

/// Parse a timestamp token in `YYYYMMDD`, `YYYYMMDDTHHMMSS`, or
/// `YYYYMMDDTHHMMSSZ` form. Date-only values get a midnight time component.
fn parse_timestamp(token: &str) -> Option<NaiveDateTime> {
    if token.contains('T') {
        if token.ends_with('Z') {
            NaiveDateTime::parse_from_str(token, "%Y%m%dT%H%M%SZ").ok()
        } else {
            NaiveDateTime::parse_from_str(token, "%Y%m%dT%H%M%S").ok()
        }
    } else {
        NaiveDate::parse_from_str(token, "%Y%m%d")
            .ok()
            .map(|d| d.and_time(NaiveTime::MIN))
    }
}

/// Extract the timestamp token from a DTSTART/DTEND line and parse it.
fn parse_timestamp_line(re: &Regex, line: &str) -> Option<NaiveDateTime> {
    let token = re.captures(line)?.get(1)?.as_str();
    let parsed = parse_timestamp(token);
    if parsed.is_none() {
        debug!(token, "Skipping malformed timestamp value");
    }
    parsed
}

/// Extract the summary label: everything after the first colon on the line.
fn parse_summary_line(line: &str) -> String {
    line.split_once(':').map(|(_, v)| v).unwrap_or("").to_string()
}

/// Scan raw feed text and extract a sequence of usable events.
///
/// Events are returned in feed order. A `BEGIN:VEVENT` encountered before a
/// prior block was closed discards the unterminated accumulator; nested
/// events are not supported. Lines outside an open event block are ignored.
pub fn extract_events(feed: &str) -> Vec<CalendarEvent> {
    let mut events = Vec::new();
    let mut open: Option<OpenEvent> = None;

    for raw_line in feed.lines() {
        let line = raw_line.trim();

        if line == BEGIN_EVENT {
            open = Some(OpenEvent::default());
        } else if line == END_EVENT {
            if let Some(event) = open.take().and_then(OpenEvent::finish) {
                events.push(event);
            }
        } else if let Some(event) = open.as_mut() {
            if line.starts_with("DTSTART") {
                if let Some(ts) = parse_timestamp_line(dtstart_re(), line) {
                    event.start = Some(ts);
                }
            } else if line.starts_with("DTEND") {
                if let Some(ts) = parse_timestamp_line(dtend_re(), line) {
                    event.end = Some(ts);
                }
            } else if line.starts_with("SUMMARY") {
                event.summary = Some(parse_summary_line(line));
            }
        }
    }

    events
}
