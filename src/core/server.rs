//! MCP Server implementation.
//!
//! [`McpServer`] is the rmcp `ServerHandler` shared by every transport. It
//! owns the tool router built from the [`Gateway`]; tools/list and
//! tools/call are served by the `#[tool_handler]` expansion.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::{Gateway, build_tool_router};

#[cfg(feature = "http")]
use crate::domains::tools::{JsonObject, to_call_result};
#[cfg(feature = "http")]
use rmcp::ErrorData as McpError;

const INSTRUCTIONS: &str = "Tools for the They Said So quotes API: search and fetch quotes, \
    authors and categories, the quote of the day, quote images and qshows, and manage your \
    private collection. Tool names follow the HTTP method and path they call \
    (e.g. get-quote-random calls GET /quote/random).";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,
    gateway: Arc<Gateway>,
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    pub fn new(config: Config, gateway: Arc<Gateway>) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(gateway.clone()),
            config: Arc::new(config),
            gateway,
        }
    }

    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    pub fn tool_count(&self) -> usize {
        self.gateway.registry().len()
    }

    /// Tool listing in registration order (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.gateway.list_tools().map(|t| t.to_json()).collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<serde_json::Value, McpError> {
        let result = to_call_result(self.gateway.call_tool(name, arguments).await)?;
        serde_json::to_value(result).map_err(|e| McpError::internal_error(e.to_string(), None))
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
