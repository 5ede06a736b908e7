//! MCP server implementation and lifecycle management.
//!
//! The server handler implements the MCP protocol via rmcp and exposes the
//! print tools. Tools are defined in `domains/tools/definitions/`, one file
//! per tool, and wired into the ToolRouter in `domains/tools/router.rs` -
//! adding a tool does not require modifying this file.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use super::error::Error;
use crate::domains::tools::build_tool_router;
use crate::upstream::PrintApiClient;

/// The main MCP server handler.
///
/// Holds the read-only configuration and the shared upstream client; every
/// tool invocation is stateless apart from these.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Builds the single long-lived upstream HTTP client and hands it to
    /// every tool route.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let config = Arc::new(config);
        let client = Arc::new(
            PrintApiClient::new(&config.upstream)
                .map_err(|e| Error::config(e.message().to_string()))?,
        );

        Ok(Self {
            tool_router: build_tool_router::<Self>(client),
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Print-fulfillment tools: search the product catalog, configure \
                 products, place and cancel orders, and inspect order status."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
