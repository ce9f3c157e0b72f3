//! Tool-specific error types.

use std::fmt;

use thiserror::Error;

use super::descriptor::ParamKind;

/// Stable classification of a failed invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ConfigurationError,
    UnknownTool,
    ValidationError,
    HttpError,
    TransportError,
    ExecutionError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigurationError => "ConfigurationError",
            Self::UnknownTool => "UnknownTool",
            Self::ValidationError => "ValidationError",
            Self::HttpError => "HttpError",
            Self::TransportError => "TransportError",
            Self::ExecutionError => "ExecutionError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the exchange an upstream non-2xx status blames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpErrorClass {
    /// 4xx: the request was rejected.
    Client,
    /// 5xx: the platform failed.
    Server,
    /// Any other non-success status (1xx, 3xx).
    Unexpected,
}

impl HttpErrorClass {
    pub fn from_status(status: u16) -> Self {
        match status {
            400..=499 => Self::Client,
            500..=599 => Self::Server,
            _ => Self::Unexpected,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Client => "request rejected by upstream",
            Self::Server => "upstream server error",
            Self::Unexpected => "unexpected upstream status",
        }
    }
}

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Credentials are missing or invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The requested tool is not registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// An argument does not match the tool's declared parameters.
    #[error("Invalid argument for '{tool}': parameter '{parameter}' (expected {expected}): {reason}")]
    Validation {
        tool: String,
        parameter: String,
        expected: ParamKind,
        reason: String,
    },

    /// The upstream API answered with a non-success status.
    #[error("{tool}: {} {status} {reason}{}", .class.label(), body_suffix(.body))]
    Http {
        tool: String,
        status: u16,
        reason: String,
        class: HttpErrorClass,
        body: Option<String>,
    },

    /// The request never produced a response (DNS, connect, timeout...).
    #[error("{tool}: request failed: {message}")]
    Transport { tool: String, message: String },

    /// Anything else that went wrong while executing the call.
    #[error("{tool}: execution failed: {message}")]
    Execution { tool: String, message: String },
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(text) if !text.trim().is_empty() => format!(": {}", text.trim()),
        _ => String::new(),
    }
}

impl ToolError {
    /// Create a new configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new validation error.
    pub fn validation(
        tool: impl Into<String>,
        parameter: impl Into<String>,
        expected: ParamKind,
        reason: impl Into<String>,
    ) -> Self {
        Self::Validation {
            tool: tool.into(),
            parameter: parameter.into(),
            expected,
            reason: reason.into(),
        }
    }

    /// Create an HTTP status error; the class is derived from the status.
    pub fn http(
        tool: impl Into<String>,
        status: u16,
        reason: impl Into<String>,
        body: Option<String>,
    ) -> Self {
        Self::Http {
            tool: tool.into(),
            status,
            reason: reason.into(),
            class: HttpErrorClass::from_status(status),
            body,
        }
    }

    /// Create a new transport error.
    pub fn transport(tool: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Transport {
            tool: tool.into(),
            message: msg.into(),
        }
    }

    /// Create a new "execution failed" error.
    pub fn execution(tool: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Execution {
            tool: tool.into(),
            message: msg.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::ConfigurationError,
            Self::UnknownTool(_) => ErrorKind::UnknownTool,
            Self::Validation { .. } => ErrorKind::ValidationError,
            Self::Http { .. } => ErrorKind::HttpError,
            Self::Transport { .. } => ErrorKind::TransportError,
            Self::Execution { .. } => ErrorKind::ExecutionError,
        }
    }

    /// Name of the tool the failure belongs to, when known.
    pub fn tool(&self) -> Option<&str> {
        match self {
            Self::Configuration(_) => None,
            Self::UnknownTool(name) => Some(name),
            Self::Validation { tool, .. }
            | Self::Http { tool, .. }
            | Self::Transport { tool, .. }
            | Self::Execution { tool, .. } => Some(tool),
        }
    }

    /// Structured payload attached to protocol-level errors.
    pub fn details(&self) -> serde_json::Value {
        let mut details = serde_json::json!({ "kind": self.kind().as_str() });
        if let Some(tool) = self.tool() {
            details["tool"] = tool.into();
        }
        match self {
            Self::Validation { parameter, expected, .. } => {
                details["parameter"] = parameter.as_str().into();
                details["expected"] = expected.as_str().into();
            }
            Self::Http { status, .. } => {
                details["status"] = (*status).into();
            }
            _ => {}
        }
        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_class_from_status() {
        assert_eq!(HttpErrorClass::from_status(404), HttpErrorClass::Client);
        assert_eq!(HttpErrorClass::from_status(503), HttpErrorClass::Server);
        assert_eq!(HttpErrorClass::from_status(302), HttpErrorClass::Unexpected);
    }

    #[test]
    fn test_http_error_message_includes_status_and_body() {
        let err = ToolError::http(
            "get-quote",
            404,
            "Not Found",
            Some("{\"error\":\"no such quote\"}".to_string()),
        );
        let msg = err.to_string();
        assert!(msg.contains("get-quote"));
        assert!(msg.contains("404 Not Found"));
        assert!(msg.contains("no such quote"));
        assert!(msg.contains("rejected"));
    }

    #[test]
    fn test_http_error_without_body() {
        let err = ToolError::http("get-qod", 500, "Internal Server Error", Some("  ".into()));
        assert_eq!(
            err.to_string(),
            "get-qod: upstream server error 500 Internal Server Error"
        );
    }

    #[test]
    fn test_validation_message_names_parameter() {
        let err = ToolError::validation("get-quote", "id", ParamKind::String, "missing");
        let msg = err.to_string();
        assert!(msg.contains("'id'"));
        assert!(msg.contains("string"));
        assert_eq!(err.kind(), ErrorKind::ValidationError);
    }

    #[test]
    fn test_details() {
        let err = ToolError::http("get-quote", 404, "Not Found", None);
        let details = err.details();
        assert_eq!(details["kind"], "HttpError");
        assert_eq!(details["tool"], "get-quote");
        assert_eq!(details["status"], 404);

        let err = ToolError::configuration("no token");
        assert!(err.details().get("tool").is_none());
    }
}
