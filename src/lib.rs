//! Quotes MCP Server Library
//!
//! An MCP server that exposes the They Said So quotes API as tools. Each
//! tool is one upstream endpoint, described by a static descriptor and
//! dispatched through a single generic gateway.
//!
//! # Architecture
//!
//! - **core**: configuration, credentials, error handling, the MCP server
//!   handler and transports (stdio, tcp, http)
//! - **domains**: business logic
//!   - **tools**: descriptor table, validation, request executor, registry,
//!     gateway and rmcp router
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use quotes_mcp_server::core::{Config, CredentialResolver, McpServer};
//! use quotes_mcp_server::domains::tools::{
//!     Gateway, RequestExecutor, ReqwestHttpClient, ToolRegistry,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let credentials = config.api.resolver().resolve()?;
//!     let client = ReqwestHttpClient::new(config.api.timeout())?;
//!     let gateway = Gateway::new(
//!         ToolRegistry::quotes_api()?,
//!         RequestExecutor::new(Arc::new(client)),
//!         Arc::new(credentials),
//!     );
//!     let server = McpServer::new(config, Arc::new(gateway));
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
