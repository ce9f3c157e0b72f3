//! Configuration management for the MCP server.
//!
//! Everything is read from `MCP_*` environment variables (a `.env` file is
//! loaded first). Upstream credentials are resolved separately, see
//! [`credentials`](super::credentials).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use super::credentials::EnvCredentialResolver;
use super::transport::TransportConfig;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Upstream quotes API settings.
    pub api: ApiConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Settings for talking to the upstream API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Credentials file; `~/.api/config.json` when unset.
    pub credentials_path: Option<PathBuf>,

    /// Per-request timeout in seconds. No timeout when unset.
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Credential resolver honoring the configured file override.
    pub fn resolver(&self) -> EnvCredentialResolver {
        EnvCredentialResolver::new(self.credentials_path.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "quotes-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            api: ApiConfig::default(),
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Variables are prefixed with `MCP_`, for example `MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL` or `MCP_API_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(name) = var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Some(level) = var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(path) = var("MCP_API_CONFIG_PATH").filter(|p| !p.trim().is_empty()) {
            info!("Credentials file override: {}", path);
            config.api.credentials_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = var("MCP_API_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.api.timeout_secs = Some(secs),
                _ => warn!(
                    "Ignoring MCP_API_TIMEOUT_SECS={:?}: expected a positive number of seconds",
                    raw
                ),
            }
        }

        config.transport = TransportConfig::from_vars(&var);

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[]);
        assert_eq!(config.server.name, "quotes-mcp-server");
        assert_eq!(config.logging.level, "info");
        assert!(config.api.credentials_path.is_none());
        assert!(config.api.timeout().is_none());
    }

    #[test]
    fn test_api_settings() {
        let config = from_pairs(&[
            ("MCP_API_CONFIG_PATH", "/etc/quotes/config.json"),
            ("MCP_API_TIMEOUT_SECS", "15"),
        ]);
        assert_eq!(
            config.api.credentials_path,
            Some(PathBuf::from("/etc/quotes/config.json"))
        );
        assert_eq!(config.api.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_invalid_timeout_ignored() {
        assert!(from_pairs(&[("MCP_API_TIMEOUT_SECS", "soon")]).api.timeout_secs.is_none());
        assert!(from_pairs(&[("MCP_API_TIMEOUT_SECS", "0")]).api.timeout_secs.is_none());
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "quotes-test");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "quotes-test");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }
}
