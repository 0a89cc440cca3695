//! Tests for configuration loading.

use std::io::Write;

use bolster_mcp::config::{Config, TransportType};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [server]
        transport = "http"
        http_port = 9090

        [calendar]
        feed_url = "https://example.com/public/basic.ics"
        fetch_timeout_secs = 5
        default_days_ahead = 14
        "#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.server.transport, TransportType::Http);
    assert_eq!(config.server.http_port, 9090);
    assert_eq!(config.calendar.feed_url, "https://example.com/public/basic.ics");
    assert_eq!(config.calendar.fetch_timeout_secs, 5);
    assert_eq!(config.calendar.default_days_ahead, 14);
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(Config::from_file("/nonexistent/bolster.toml").is_err());
}

#[test]
fn test_invalid_config_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [calendar]
        fetch_timeout_secs = 0
        "#
    )
    .unwrap();

    assert!(Config::from_file(file.path()).is_err());
}
