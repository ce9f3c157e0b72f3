//! Transport configuration types.

use serde::{Deserialize, Serialize};
#[cfg(any(feature = "tcp", feature = "http"))]
use tracing::warn;

/// Which front-end carries MCP messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output (default for MCP clients).
    #[cfg(feature = "stdio")]
    Stdio,

    /// One MCP session per accepted TCP connection.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// JSON-RPC over HTTP POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// TCP listener settings.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpConfig {
    pub host: String,
    pub port: u16,
}

/// HTTP listener settings.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,

    /// Path of the JSON-RPC endpoint.
    pub rpc_path: String,

    /// Enable CORS for browser clients.
    pub enable_cors: bool,
}

#[cfg(any(feature = "tcp", feature = "http"))]
const DEFAULT_HOST: &str = "127.0.0.1";

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: 3000,
        }
    }
}

#[cfg(feature = "tcp")]
impl TcpConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: 8080,
            rpc_path: "/mcp".to_string(),
            enable_cors: true,
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            Self::Stdio
        }

        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        {
            Self::Tcp(TcpConfig::default())
        }

        #[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
        {
            Self::Http(HttpConfig::default())
        }

        #[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio, tcp, or http");
        }
    }
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn port_var(var: &impl Fn(&str) -> Option<String>, key: &str, default: u16) -> u16 {
    match var(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring {}={:?}: not a valid port, using {}", key, raw, default);
            default
        }),
    }
}

impl TransportConfig {
    /// Read `MCP_TRANSPORT` and the matching listener variables.
    ///
    /// Unknown or disabled transports fall back to the default one.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let kind = var("MCP_TRANSPORT").unwrap_or_default().to_lowercase();

        match kind.as_str() {
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio,
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig {
                host: var("MCP_TCP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: port_var(&var, "MCP_TCP_PORT", 3000),
            }),
            #[cfg(feature = "http")]
            "http" => {
                let defaults = HttpConfig::default();
                Self::Http(HttpConfig {
                    host: var("MCP_HTTP_HOST").unwrap_or(defaults.host),
                    port: port_var(&var, "MCP_HTTP_PORT", defaults.port),
                    rpc_path: var("MCP_HTTP_PATH").unwrap_or(defaults.rpc_path),
                    enable_cors: var("MCP_HTTP_CORS")
                        .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0"))
                        .unwrap_or(defaults.enable_cors),
                })
            }
            "" => Self::default(),
            other => {
                tracing::warn!("Unknown or disabled transport '{}', using default", other);
                Self::default()
            }
        }
    }

    /// Human-readable summary for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("TCP on {}", cfg.address()),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}{}", cfg.address(), cfg.rpc_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> TransportConfig {
        let vars: HashMap<&str, &str> = pairs.iter().copied().collect();
        TransportConfig::from_vars(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_default_is_stdio() {
        assert!(matches!(from_pairs(&[]), TransportConfig::Stdio));
        assert!(matches!(
            from_pairs(&[("MCP_TRANSPORT", "carrier-pigeon")]),
            TransportConfig::Stdio
        ));
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_from_vars() {
        match from_pairs(&[("MCP_TRANSPORT", "TCP"), ("MCP_TCP_PORT", "4100")]) {
            TransportConfig::Tcp(cfg) => assert_eq!(cfg.address(), "127.0.0.1:4100"),
            other => panic!("expected tcp, got {other:?}"),
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_from_vars() {
        let config = from_pairs(&[
            ("MCP_TRANSPORT", "http"),
            ("MCP_HTTP_PORT", "not-a-port"),
            ("MCP_HTTP_CORS", "false"),
        ]);
        match &config {
            TransportConfig::Http(cfg) => {
                assert_eq!(cfg.port, 8080);
                assert_eq!(cfg.rpc_path, "/mcp");
                assert!(!cfg.enable_cors);
            }
            other => panic!("expected http, got {other:?}"),
        }
        assert_eq!(config.description(), "HTTP on 127.0.0.1:8080/mcp");
    }
}
