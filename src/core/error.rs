//! Error types and handling for the MCP server.
//!
//! Per-call failures stay [`ToolError`](crate::domains::tools::ToolError)s
//! and never reach this type; it covers startup and wiring.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified startup error for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Upstream credentials could not be resolved.
    #[error("Credentials error: {0}")]
    Credentials(#[from] super::credentials::CredentialsError),

    /// Error raised while starting or running a transport.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// The upstream HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::credentials::CredentialsError;
    use crate::core::transport::TransportError;

    #[test]
    fn test_from_conversions() {
        let err: Error = CredentialsError::Missing("bearerToken").into();
        assert!(matches!(err, Error::Credentials(_)));
        assert!(err.to_string().contains("missing bearerToken"));

        let err: Error = TransportError::init("handshake failed").into();
        assert_eq!(
            err.to_string(),
            "Transport error: Server initialization error: handshake failed"
        );
    }

    #[test]
    fn test_config_constructor() {
        assert_eq!(
            Error::config("duplicate tool name: x").to_string(),
            "Configuration error: duplicate tool name: x"
        );
    }
}
