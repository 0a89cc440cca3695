//! Query window construction and event filtering.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::AvailabilityError;

use super::extract::CalendarEvent;

/// Maximum number of days a single availability query may cover.
pub const MAX_DAYS_AHEAD: u32 = 365;

/// The date window an availability query covers: `[start, start + days)`.
///
/// Constructed fresh per request. Timestamps are naive to match the
/// extractor's representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl QueryWindow {
    /// Build a window from an optional `YYYY-MM-DD` start date (default:
    /// the current local moment) and a day count.
    ///
    /// A malformed date or an out-of-range day count is an
    /// [`AvailabilityError::InvalidInput`]; it is never silently defaulted.
    pub fn starting(
        start_date: Option<&str>,
        days_ahead: u32,
    ) -> Result<Self, AvailabilityError> {
        if days_ahead == 0 || days_ahead > MAX_DAYS_AHEAD {
            return Err(AvailabilityError::InvalidInput(format!(
                "days_ahead must be between 1 and {MAX_DAYS_AHEAD}, got {days_ahead}"
            )));
        }

        let start = match start_date {
            Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|e| {
                    AvailabilityError::InvalidInput(format!(
                        "invalid start_date {s:?}: expected YYYY-MM-DD ({e})"
                    ))
                })?
                .and_time(NaiveTime::MIN),
            None => Local::now().naive_local(),
        };

        Ok(Self {
            start,
            end: start + Duration::days(i64::from(days_ahead)),
        })
    }

    /// Inclusive overlap test: events merely touching a window boundary
    /// count as overlapping.
    pub fn overlaps(&self, event: &CalendarEvent) -> bool {
        event.start <= self.end && event.end >= self.start
    }
}

/// Select the events overlapping the window, sorted ascending by start.
///
/// The sort is stable, so events with equal starts keep extraction order.
pub fn events_in_window(events: Vec<CalendarEvent>, window: &QueryWindow) -> Vec<CalendarEvent> {
    let mut relevant: Vec<CalendarEvent> = events
        .into_iter()
        .filter(|event| window.overlaps(event))
        .collect();
    relevant.sort_by_key(|event| event.start);
    relevant
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn event(start: NaiveDateTime, end: NaiveDateTime, summary: &str) -> CalendarEvent {
        CalendarEvent {
            start,
            end,
            summary: Some(summary.to_string()),
        }
    }

    fn window() -> QueryWindow {
        QueryWindow::starting(Some("2024-12-01"), 7).unwrap()
    }

    #[test]
    fn test_window_bounds() {
        let w = window();
        assert_eq!(w.start, dt(2024, 12, 1, 0, 0));
        assert_eq!(w.end, dt(2024, 12, 8, 0, 0));
    }

    #[test]
    fn test_invalid_start_date_rejected() {
        let result = QueryWindow::starting(Some("01/12/2024"), 7);
        assert!(matches!(result, Err(AvailabilityError::InvalidInput(_))));
    }

    #[test]
    fn test_days_ahead_out_of_range_rejected() {
        assert!(QueryWindow::starting(Some("2024-12-01"), 0).is_err());
        assert!(QueryWindow::starting(Some("2024-12-01"), 366).is_err());
        assert!(QueryWindow::starting(Some("2024-12-01"), 365).is_ok());
    }

    #[test]
    fn test_default_start_is_now() {
        let before = Local::now().naive_local();
        let w = QueryWindow::starting(None, 7).unwrap();
        let after = Local::now().naive_local();
        assert!(w.start >= before && w.start <= after);
        assert_eq!(w.end - w.start, Duration::days(7));
    }

    #[test]
    fn test_filter_sorts_ascending_regardless_of_input_order() {
        let w = window();
        let events = vec![
            event(dt(2024, 12, 3, 14, 0), dt(2024, 12, 3, 15, 0), "Project Review"),
            event(dt(2024, 12, 2, 10, 0), dt(2024, 12, 2, 11, 0), "Team Meeting"),
        ];
        let relevant = events_in_window(events, &w);
        assert_eq!(relevant[0].summary.as_deref(), Some("Team Meeting"));
        assert_eq!(relevant[1].summary.as_deref(), Some("Project Review"));
    }

    #[test]
    fn test_tie_on_start_keeps_extraction_order() {
        let w = window();
        let events = vec![
            event(dt(2024, 12, 2, 10, 0), dt(2024, 12, 2, 11, 0), "First"),
            event(dt(2024, 12, 2, 10, 0), dt(2024, 12, 2, 12, 0), "Second"),
        ];
        let relevant = events_in_window(events, &w);
        assert_eq!(relevant[0].summary.as_deref(), Some("First"));
        assert_eq!(relevant[1].summary.as_deref(), Some("Second"));
    }

    #[test]
    fn test_boundary_events_included() {
        let w = window();
        // Ends exactly at window start
        let touches_start = event(dt(2024, 11, 30, 23, 0), w.start, "Touches start");
        // Starts exactly at window end
        let touches_end = event(w.end, dt(2024, 12, 8, 1, 0), "Touches end");
        let relevant = events_in_window(vec![touches_start, touches_end], &w);
        assert_eq!(relevant.len(), 2);
    }

    #[test]
    fn test_events_outside_window_excluded() {
        let w = window();
        let before = event(dt(2024, 11, 20, 9, 0), dt(2024, 11, 20, 10, 0), "Before");
        let after = event(dt(2024, 12, 20, 9, 0), dt(2024, 12, 20, 10, 0), "After");
        assert!(events_in_window(vec![before, after], &w).is_empty());
    }
}
