//! Core module containing shared infrastructure components.
//!
//! Configuration, credentials, the unified error type, the MCP server
//! handler and the transport front-ends.

pub mod config;
pub mod credentials;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use credentials::{CredentialResolver, Credentials, EnvCredentialResolver};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
