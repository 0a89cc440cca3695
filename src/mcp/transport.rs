//! Transport layer for the MCP server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use rmcp::transport::stdio;
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::tower::{
    StreamableHttpServerConfig, StreamableHttpService,
};
use rmcp::ServiceExt;
use tracing::info;

use crate::config::TransportType;
use crate::mcp::BolsterServer;

/// Run the MCP server with stdio transport.
pub async fn run_stdio(server: BolsterServer) -> Result<()> {
    info!("Starting Bolster MCP server with stdio transport");

    let service = server.serve(stdio()).await?;

    info!("Bolster MCP server running...");
    service.waiting().await?;

    info!("Bolster MCP server shutting down");
    Ok(())
}

/// Run the MCP server with HTTP/SSE (Streamable HTTP) transport.
pub async fn run_http(server: BolsterServer, port: u16) -> Result<()> {
    info!(
        "Starting Bolster MCP server with HTTP/SSE transport on port {}",
        port
    );

    // Session manager for handling multiple connections
    let session_manager = Arc::new(LocalSessionManager::default());

    // Each connection gets its own clone of the handler
    let server_for_factory = server.clone();

    let http_config = StreamableHttpServerConfig::default();
    let http_service = StreamableHttpService::new(
        move || Ok(server_for_factory.clone()),
        session_manager,
        http_config,
    );

    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(root_handler))
        .fallback_service(http_service);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Bolster MCP server listening on http://{}", addr);
    info!("MCP endpoint available at root path");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    info!("Bolster MCP server shutting down");
    Ok(())
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Root handler with basic info.
async fn root_handler() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "bolster-mcp",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Curated resources and availability tools for Andrew Bolster",
        "endpoints": {
            "health": "/health"
        }
    }))
}

/// Run the MCP server with the configured transport.
pub async fn run_server(
    server: BolsterServer,
    transport: TransportType,
    port: u16,
) -> Result<()> {
    match transport {
        TransportType::Stdio => run_stdio(server).await,
        TransportType::Http => run_http(server, port).await,
    }
}
