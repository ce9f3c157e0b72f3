//! MCP Server Entry Point
//!
//! Loads configuration, resolves upstream credentials, wires the gateway
//! and starts the configured transport.

use std::sync::Arc;

use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use quotes_mcp_server::core::{Config, CredentialResolver, McpServer, TransportService};
use quotes_mcp_server::domains::tools::{Gateway, RequestExecutor, ReqwestHttpClient, ToolRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    if let Err(e) = run(config).await {
        error!("{}", e);
        return Err(e.into());
    }

    info!("Server shutting down");

    Ok(())
}

/// Resolve credentials, build the gateway and serve until shutdown.
async fn run(config: Config) -> quotes_mcp_server::Result<()> {
    let credentials = config.api.resolver().resolve()?;
    info!(base_url = credentials.base_url(), "Upstream credentials resolved");

    let client = ReqwestHttpClient::new(config.api.timeout())?;
    let gateway = Gateway::new(
        ToolRegistry::quotes_api()?,
        RequestExecutor::new(Arc::new(client)),
        Arc::new(credentials),
    );

    let server = McpServer::new(config.clone(), Arc::new(gateway));
    info!("Server initialized with {} tools", server.tool_count());

    TransportService::new(config.transport).run(server).await?;

    Ok(())
}

/// Initialize the logging subsystem on stderr.
///
/// `RUST_LOG` directives are honored on top of the configured level.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
