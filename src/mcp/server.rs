//! MCP server implementation for Bolster MCP.

use std::future::Future;
use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::*,
    schemars, service::RequestContext, tool, tool_handler, tool_router, ErrorData as McpError,
    RoleServer, ServerHandler,
};
use serde::{Deserialize, Serialize};

use crate::calendar::AvailabilityChecker;
use crate::config::Config;
use crate::contact;
use crate::error::{AvailabilityError, BolsterError};
use crate::profile;

const SERVER_INSTRUCTIONS: &str = "This server provides curated resources and links about \
     Andrew Bolster, including his professional background, research interests, community \
     involvement, and key projects like Farset Labs. Use these resources to learn about \
     Andrew's work in data science, AI research, autonomous systems, and technology \
     community building. Use 'check_availability' to inspect his public calendar and \
     'send_contact_message' to reach out.";

/// Parameters for the check_availability tool.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CheckAvailabilityParams {
    /// Start date in YYYY-MM-DD format (defaults to today)
    #[serde(default)]
    pub start_date: Option<String>,
    /// Number of days to check ahead (default: 7)
    #[serde(default)]
    pub days_ahead: Option<u32>,
}

/// Parameters for the send_contact_message tool.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SendContactMessageParams {
    /// The message content to send to Andrew
    pub message: String,
    /// Name or identifier of the person sending the message
    pub sender: String,
}

/// Bolster MCP server handler.
#[derive(Clone)]
pub struct BolsterServer {
    config: Arc<Config>,
    checker: AvailabilityChecker,
    tool_router: ToolRouter<Self>,
}

impl BolsterServer {
    /// Create a new server with the given configuration.
    pub fn new(config: Config) -> crate::error::Result<Self> {
        let checker =
            AvailabilityChecker::new(&config.calendar).map_err(BolsterError::Availability)?;
        Ok(Self {
            config: Arc::new(config),
            checker,
            tool_router: Self::tool_router(),
        })
    }

    /// Create a new server with default configuration.
    pub fn with_defaults() -> crate::error::Result<Self> {
        Self::new(Config::load()?)
    }

    /// The configuration this server was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[tool_router]
impl BolsterServer {
    /// Check Andrew Bolster's public calendar for events in a date window.
    #[tool(
        description = "Check Andrew Bolster's calendar availability using his public iCal feed. \
                       Returns an availability summary for the specified period."
    )]
    async fn check_availability(
        &self,
        Parameters(params): Parameters<CheckAvailabilityParams>,
    ) -> std::result::Result<CallToolResult, McpError> {
        match self
            .checker
            .check(params.start_date.as_deref(), params.days_ahead)
            .await
        {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(BolsterError::Availability(AvailabilityError::InvalidInput(msg))) => {
                Err(McpError::invalid_params(msg, None))
            }
            Err(e) => Err(McpError::internal_error(e.to_string(), None)),
        }
    }

    /// Accept a contact message and return a delivery acknowledgement.
    #[tool(
        description = "Send a message to Andrew Bolster for professional inquiries or \
                       collaboration requests. Returns a confirmation of the contact attempt."
    )]
    async fn send_contact_message(
        &self,
        Parameters(params): Parameters<SendContactMessageParams>,
    ) -> std::result::Result<CallToolResult, McpError> {
        if params.message.trim().is_empty() {
            return Err(McpError::invalid_params(
                "message must not be empty",
                None,
            ));
        }
        if params.sender.trim().is_empty() {
            return Err(McpError::invalid_params("sender must not be empty", None));
        }

        let receipt = contact::queue_message(&params.message, &params.sender);
        Ok(CallToolResult::success(vec![Content::text(
            receipt.render(),
        )]))
    }
}

#[tool_handler]
impl ServerHandler for BolsterServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        let resources = profile::resources()
            .iter()
            .map(|r| {
                let mut raw = RawResource::new(r.uri, r.name);
                raw.description = Some(r.description.to_string());
                raw.mime_type = Some("text/markdown".to_string());
                raw.no_annotation()
            })
            .collect();

        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        let uri = request.uri;
        match profile::find(&uri) {
            Some(resource) => Ok(ReadResourceResult {
                contents: vec![ResourceContents::text(resource.body, uri)],
            }),
            None => Err(McpError::resource_not_found(
                format!("Unknown resource: {uri}"),
                None,
            )),
        }
    }
}
