//! Tests for the MCP server handler.

use bolster_mcp::config::Config;
use bolster_mcp::mcp::BolsterServer;
use bolster_mcp::profile;

#[tokio::test]
async fn test_server_creation() {
    let server = BolsterServer::new(Config::default()).unwrap();
    drop(server);
}

#[tokio::test]
async fn test_server_info() {
    use rmcp::ServerHandler;

    let server = BolsterServer::new(Config::default()).unwrap();
    let info = server.get_info();

    assert!(info.instructions.is_some());
    assert!(
        info.instructions.as_ref().unwrap().contains("Andrew Bolster"),
        "Instructions should describe whose resources this server exposes"
    );
    assert!(info.capabilities.tools.is_some(), "tools should be enabled");
    assert!(
        info.capabilities.resources.is_some(),
        "resources should be enabled"
    );
}

#[test]
fn test_every_profile_resource_has_distinct_uri() {
    let mut uris: Vec<&str> = profile::resources().iter().map(|r| r.uri).collect();
    let total = uris.len();
    uris.sort_unstable();
    uris.dedup();
    assert_eq!(uris.len(), total, "resource URIs must be unique");
}
