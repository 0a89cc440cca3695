//! End-to-end tests for the calendar availability pipeline against stub
//! HTTP feed servers.

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::StatusCode;
use axum::{routing::get, Router};

use bolster_mcp::calendar::{AvailabilityChecker, FeedFetcher};

const TWO_EVENT_FEED: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
BEGIN:VEVENT\r\n\
DTSTART:20241202T100000Z\r\n\
DTEND:20241202T110000Z\r\n\
SUMMARY:Team Meeting\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
DTSTART:20241203T140000Z\r\n\
DTEND:20241203T150000Z\r\n\
SUMMARY:Project Review\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

const EMPTY_FEED: &str = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n";

/// Spawn a loopback HTTP server for the given router, returning its address.
async fn spawn_server(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn checker_for(addr: SocketAddr) -> AvailabilityChecker {
    let fetcher = FeedFetcher::new(
        format!("http://{addr}/feed.ics"),
        Duration::from_secs(2),
    )
    .unwrap();
    AvailabilityChecker::with_fetcher(fetcher, 7)
}

#[tokio::test]
async fn test_events_found_in_window() {
    let addr = spawn_server(Router::new().route("/feed.ics", get(|| async { TWO_EVENT_FEED }))).await;
    let checker = checker_for(addr);

    let summary = checker.check(Some("2024-12-01"), Some(7)).await.unwrap();
    assert!(summary.contains("Scheduled events found"));
    assert!(summary.contains("2024-12-02 10:00 - 2024-12-02 11:00: Team Meeting"));
    assert!(summary.contains("2024-12-03 14:00 - 2024-12-03 15:00: Project Review"));
    assert!(
        summary.find("Team Meeting").unwrap() < summary.find("Project Review").unwrap(),
        "events must be listed chronologically"
    );
}

#[tokio::test]
async fn test_no_events_outside_window() {
    let addr = spawn_server(Router::new().route("/feed.ics", get(|| async { TWO_EVENT_FEED }))).await;
    let checker = checker_for(addr);

    let summary = checker.check(Some("2025-03-01"), Some(7)).await.unwrap();
    assert!(summary.contains("No scheduled events found"));
    assert!(summary.contains("2025-03-01"));
    assert!(summary.contains("2025-03-08"));
}

#[tokio::test]
async fn test_empty_feed_reports_no_events() {
    let addr = spawn_server(Router::new().route("/feed.ics", get(|| async { EMPTY_FEED }))).await;
    let checker = checker_for(addr);

    let summary = checker.check(Some("2024-12-01"), None).await.unwrap();
    assert!(summary.contains("No scheduled events found"));
}

#[tokio::test]
async fn test_repeated_checks_are_identical() {
    let addr = spawn_server(Router::new().route("/feed.ics", get(|| async { TWO_EVENT_FEED }))).await;
    let checker = checker_for(addr);

    let first = checker.check(Some("2024-12-01"), Some(7)).await.unwrap();
    let second = checker.check(Some("2024-12-01"), Some(7)).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_connection_refused_renders_fetch_error() {
    // Bind then drop to get an address nothing is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let checker = checker_for(addr);
    let summary = checker.check(Some("2024-12-01"), Some(7)).await.unwrap();
    assert!(summary.contains("Error fetching calendar data"));
    assert!(summary.contains("contact directly"));
    assert!(!summary.contains("Scheduled events"));
}

#[tokio::test]
async fn test_http_error_status_renders_fetch_error() {
    let addr = spawn_server(Router::new().route(
        "/feed.ics",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ))
    .await;
    let checker = checker_for(addr);

    let summary = checker.check(Some("2024-12-01"), Some(7)).await.unwrap();
    assert!(summary.contains("Error fetching calendar data"));
    assert!(summary.contains("contact directly"));
}

#[tokio::test]
async fn test_invalid_start_date_is_an_error() {
    let addr = spawn_server(Router::new().route("/feed.ics", get(|| async { EMPTY_FEED }))).await;
    let checker = checker_for(addr);

    let result = checker.check(Some("December 1st"), Some(7)).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_invalid_days_ahead_is_an_error() {
    let addr = spawn_server(Router::new().route("/feed.ics", get(|| async { EMPTY_FEED }))).await;
    let checker = checker_for(addr);

    let result = checker.check(Some("2024-12-01"), Some(0)).await;
    assert!(result.is_err());
}
