//! Credentials for the upstream quotes API.
//!
//! Resolution order: `API_BASE_URL` / `API_BEARER_TOKEN` from the
//! environment, then the per-user JSON file (`~/.api/config.json` unless
//! overridden) for whatever the environment did not provide.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

pub const BASE_URL_ENV: &str = "API_BASE_URL";
pub const BEARER_TOKEN_ENV: &str = "API_BEARER_TOKEN";

/// Errors raised while resolving credentials.
#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error(
        "Configuration not found. Set API_BASE_URL and API_BEARER_TOKEN or create {}",
        .0.display()
    )]
    NotFound(PathBuf),

    #[error("Cannot locate the home directory for the credentials file")]
    NoHomeDir,

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Incomplete credentials: missing {0}")]
    Missing(&'static str),

    #[error("Invalid base URL '{0}': must start with http:// or https://")]
    InvalidBaseUrl(String),
}

/// Resolved, immutable credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    base_url: String,
    bearer_token: String,
}

impl Credentials {
    /// Build credentials, trimming and checking both values.
    pub fn new(
        base_url: impl Into<String>,
        bearer_token: impl Into<String>,
    ) -> Result<Self, CredentialsError> {
        let base_url = base_url.into().trim().to_string();
        let bearer_token = bearer_token.into().trim().to_string();

        if base_url.is_empty() {
            return Err(CredentialsError::Missing("baseURL"));
        }
        if bearer_token.is_empty() {
            return Err(CredentialsError::Missing("bearerToken"));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CredentialsError::InvalidBaseUrl(base_url));
        }

        Ok(Self {
            base_url,
            bearer_token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn bearer_token(&self) -> &str {
        &self.bearer_token
    }
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("bearer_token", &"[REDACTED]")
            .finish()
    }
}

/// Source of credentials for the gateway.
pub trait CredentialResolver: Send + Sync {
    fn resolve(&self) -> Result<Credentials, CredentialsError>;
}

/// Already-resolved credentials resolve to themselves.
impl CredentialResolver for Credentials {
    fn resolve(&self) -> Result<Credentials, CredentialsError> {
        Ok(self.clone())
    }
}

/// Shape of the credentials file.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CredentialsFile {
    #[serde(rename = "baseURL")]
    base_url: Option<String>,
    bearer_token: Option<String>,
}

/// Returns the default credentials file path (`~/.api/config.json`).
pub fn default_credentials_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".api").join("config.json"))
}

/// Environment first, credentials file second.
#[derive(Debug, Clone, Default)]
pub struct EnvCredentialResolver {
    /// Overrides [`default_credentials_path`].
    file: Option<PathBuf>,
}

impl EnvCredentialResolver {
    pub fn new(file: Option<PathBuf>) -> Self {
        Self { file }
    }

    /// Merge explicit values with the file, field by field.
    pub fn resolve_from(
        &self,
        base_url: Option<String>,
        bearer_token: Option<String>,
    ) -> Result<Credentials, CredentialsError> {
        let base_url = base_url.filter(|v| !v.trim().is_empty());
        let bearer_token = bearer_token.filter(|v| !v.trim().is_empty());

        if let (Some(url), Some(token)) = (&base_url, &bearer_token) {
            debug!("Credentials taken from the environment");
            return Credentials::new(url.as_str(), token.as_str());
        }

        let path = match &self.file {
            Some(path) => path.clone(),
            None => default_credentials_path().ok_or(CredentialsError::NoHomeDir)?,
        };
        let file = read_credentials_file(&path)?;
        info!("Credentials loaded from {}", path.display());

        Credentials::new(
            base_url.or(file.base_url).unwrap_or_default(),
            bearer_token.or(file.bearer_token).unwrap_or_default(),
        )
    }
}

impl CredentialResolver for EnvCredentialResolver {
    fn resolve(&self) -> Result<Credentials, CredentialsError> {
        self.resolve_from(
            std::env::var(BASE_URL_ENV).ok(),
            std::env::var(BEARER_TOKEN_ENV).ok(),
        )
    }
}

fn read_credentials_file(path: &Path) -> Result<CredentialsFile, CredentialsError> {
    if !path.exists() {
        return Err(CredentialsError::NotFound(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path).map_err(|e| CredentialsError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&contents).map_err(|e| CredentialsError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.json");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_env_values_win() {
        let resolver = EnvCredentialResolver::new(Some(PathBuf::from("/nonexistent/config.json")));
        let creds = resolver
            .resolve_from(Some("https://api.example.com".into()), Some("tok".into()))
            .unwrap();
        assert_eq!(creds.base_url(), "https://api.example.com");
        assert_eq!(creds.bearer_token(), "tok");
    }

    #[test]
    fn test_file_fills_missing_token() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            r#"{"baseURL": "https://file.example.com", "bearerToken": "file-token"}"#,
        );
        let resolver = EnvCredentialResolver::new(Some(path));
        let creds = resolver
            .resolve_from(Some("https://env.example.com".into()), None)
            .unwrap();
        assert_eq!(creds.base_url(), "https://env.example.com");
        assert_eq!(creds.bearer_token(), "file-token");
    }

    #[test]
    fn test_file_only() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            r#"{"baseURL": "https://file.example.com", "bearerToken": "file-token"}"#,
        );
        let creds = EnvCredentialResolver::new(Some(path))
            .resolve_from(None, Some("   ".into()))
            .unwrap();
        assert_eq!(creds.base_url(), "https://file.example.com");
        assert_eq!(creds.bearer_token(), "file-token");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let resolver = EnvCredentialResolver::new(Some(dir.path().join("absent.json")));
        let err = resolver.resolve_from(None, None).unwrap_err();
        assert!(matches!(err, CredentialsError::NotFound(_)));
        assert!(err.to_string().contains(BASE_URL_ENV));
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "{ not json");
        let err = EnvCredentialResolver::new(Some(path))
            .resolve_from(None, None)
            .unwrap_err();
        assert!(matches!(err, CredentialsError::Parse { .. }));
    }

    #[test]
    fn test_incomplete_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, r#"{"baseURL": "https://file.example.com"}"#);
        let err = EnvCredentialResolver::new(Some(path))
            .resolve_from(None, None)
            .unwrap_err();
        assert!(matches!(err, CredentialsError::Missing("bearerToken")));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = Credentials::new("api.example.com", "tok").unwrap_err();
        assert!(matches!(err, CredentialsError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_token_redacted_in_debug() {
        let creds = Credentials::new("https://api.example.com", "super_secret_key").unwrap();
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_static_resolver() {
        let creds = Credentials::new("https://api.example.com", "tok").unwrap();
        assert_eq!(creds.resolve().unwrap(), creds);
    }
}
