//! Tool Router - builds the rmcp ToolRouter from the gateway.
//!
//! One dynamic route per registered descriptor; every route forwards to
//! [`Gateway::call_tool`] and converts the outcome to the MCP result shape.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
    model::{CallToolResult, Content},
};

use super::error::{ErrorKind, ToolError};
use super::gateway::{Gateway, InvocationResult};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(gateway: Arc<Gateway>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    gateway
        .list_tools()
        .fold(ToolRouter::new(), |router, summary| {
            let gateway = gateway.clone();
            let name = summary.name;
            router.with_route(ToolRoute::new_dyn(
                summary.to_tool(),
                move |ctx: ToolCallContext<'_, S>| {
                    let gateway = gateway.clone();
                    let arguments = ctx.arguments.clone();
                    async move { to_call_result(gateway.call_tool(name, arguments).await) }.boxed()
                },
            ))
        })
}

/// Success becomes one text content item; failures become protocol errors.
pub fn to_call_result(result: InvocationResult) -> Result<CallToolResult, McpError> {
    result
        .map(|text| CallToolResult::success(vec![Content::text(text)]))
        .map_err(|e| to_mcp_error(&e))
}

/// Caller mistakes map to `invalid_params`, everything else to `internal_error`.
pub fn to_mcp_error(err: &ToolError) -> McpError {
    let data = Some(err.details());
    match err.kind() {
        ErrorKind::UnknownTool | ErrorKind::ValidationError => {
            McpError::invalid_params(err.to_string(), data)
        }
        ErrorKind::ConfigurationError
        | ErrorKind::HttpError
        | ErrorKind::TransportError
        | ErrorKind::ExecutionError => McpError::internal_error(err.to_string(), data),
    }
}
