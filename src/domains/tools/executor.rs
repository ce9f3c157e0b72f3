//! Request executor.
//!
//! Turns one (descriptor, validated arguments, credentials) triple into one
//! HTTP exchange with the quotes API and normalizes the answer into text.
//! The network itself sits behind [`HttpClient`] so the gateway can be
//! exercised without I/O.

use std::sync::Arc;
use std::time::Duration;

use base64::Engine as _;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};

use super::descriptor::{EndpointDescriptor, HttpMethod, Placement};
use super::error::ToolError;
use super::validation::JsonObject;
use crate::core::credentials::Credentials;

/// A fully built request, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

impl OutboundRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw upstream answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub reason: String,
    pub body: Vec<u8>,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportFailure(pub String);

/// Sends one request and returns the raw response.
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: OutboundRequest) -> Result<UpstreamResponse, TransportFailure>;
}

/// Production [`HttpClient`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Build a client; `timeout` bounds each whole request when set.
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("quotes-mcp-server/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, request: OutboundRequest) -> Result<UpstreamResponse, TransportFailure> {
        let mut builder = self.client.request(request.method.into(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(describe_reqwest_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(describe_reqwest_error)?;

        Ok(UpstreamResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body: body.to_vec(),
        })
    }
}

/// Flatten a reqwest error and its sources, leaving the URL out.
fn describe_reqwest_error(err: reqwest::Error) -> TransportFailure {
    let kind = if err.is_timeout() {
        "timed out"
    } else if err.is_connect() {
        "connection failed"
    } else {
        "network error"
    };

    let err = err.without_url();
    let mut message = format!("{kind}: {err}");
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    TransportFailure(message)
}

/// Executes descriptor-driven requests through an [`HttpClient`].
#[derive(Clone)]
pub struct RequestExecutor {
    client: Arc<dyn HttpClient>,
}

impl RequestExecutor {
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    /// Send the request for `descriptor` and normalize the response.
    #[instrument(skip_all, fields(tool = descriptor.name, method = %descriptor.method))]
    pub async fn execute(
        &self,
        descriptor: &EndpointDescriptor,
        arguments: &JsonObject,
        credentials: &Credentials,
    ) -> Result<String, ToolError> {
        let request = build_request(descriptor, arguments, credentials)?;
        debug!(url = %request.url, "Sending upstream request");

        let response = self
            .client
            .send(request)
            .await
            .map_err(|e| ToolError::transport(descriptor.name, e.0))?;

        debug!(status = response.status, bytes = response.body.len(), "Upstream responded");

        if !response.is_success() {
            let body = String::from_utf8_lossy(&response.body);
            return Err(ToolError::http(
                descriptor.name,
                response.status,
                response.reason,
                (!body.trim().is_empty()).then(|| truncate_error_body(&body)),
            ));
        }

        render_body(descriptor, &response.body)
    }
}

/// Build the outgoing request: query entries for query-placed parameters,
/// one JSON object for body-placed ones.
pub fn build_request(
    descriptor: &EndpointDescriptor,
    arguments: &JsonObject,
    credentials: &Credentials,
) -> Result<OutboundRequest, ToolError> {
    let mut query: Vec<(&str, String)> = Vec::new();
    let mut body = JsonObject::new();

    for param in descriptor.params {
        let Some(value) = arguments.get(param.name) else {
            continue;
        };
        match param.placement {
            Placement::Query => {
                if let Some(text) = query_value(value) {
                    query.push((param.name, text));
                }
            }
            Placement::Body => {
                if !value.is_null() {
                    body.insert(param.name.to_string(), value.clone());
                }
            }
        }
    }

    let mut url = format!(
        "{}{}",
        credentials.base_url().trim_end_matches('/'),
        descriptor.path
    );
    if !query.is_empty() {
        let encoded = serde_urlencoded::to_string(&query)
            .map_err(|e| ToolError::execution(descriptor.name, format!("query encoding: {e}")))?;
        url.push('?');
        url.push_str(&encoded);
    }

    let mut headers = vec![
        ("Authorization", format!("Bearer {}", credentials.bearer_token())),
        ("Accept", "application/json".to_string()),
    ];

    let body = if descriptor.method.has_body() {
        headers.push(("Content-Type", "application/json".to_string()));
        let payload = serde_json::to_string(&Value::Object(body))
            .map_err(|e| ToolError::execution(descriptor.name, format!("body encoding: {e}")))?;
        Some(payload)
    } else {
        None
    };

    Ok(OutboundRequest {
        method: descriptor.method,
        url,
        headers,
        body,
    })
}

/// Upper bound on the upstream error body carried in a failure.
const MAX_ERROR_BODY: usize = 4096;

fn truncate_error_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &body[..end])
}

/// Text for a query entry, or `None` when the value is falsy.
fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// Pretty JSON when the body parses, the text verbatim otherwise, base64
/// for binary payloads such as quote images.
fn render_body(descriptor: &EndpointDescriptor, body: &[u8]) -> Result<String, ToolError> {
    if let Ok(json) = serde_json::from_slice::<Value>(body) {
        return serde_json::to_string_pretty(&json)
            .map_err(|e| ToolError::execution(descriptor.name, format!("formatting JSON: {e}")));
    }

    match std::str::from_utf8(body) {
        Ok(text) => Ok(text.to_string()),
        Err(_) => {
            debug!(tool = descriptor.name, "Binary response, returning base64");
            Ok(base64::engine::general_purpose::STANDARD.encode(body))
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted [`HttpClient`] for tests.

    use std::sync::Mutex;

    use super::*;

    pub enum Reply {
        Respond(UpstreamResponse),
        /// Answer 200 with the request body.
        EchoBody,
        Fail(String),
    }

    pub struct MockHttpClient {
        reply: Reply,
        pub requests: Mutex<Vec<OutboundRequest>>,
    }

    impl MockHttpClient {
        pub fn new(reply: Reply) -> Arc<Self> {
            Arc::new(Self {
                reply,
                requests: Mutex::new(Vec::new()),
            })
        }

        pub fn json(status: u16, body: &str) -> Arc<Self> {
            Self::new(Reply::Respond(UpstreamResponse {
                status,
                reason: reason_for(status).to_string(),
                body: body.as_bytes().to_vec(),
            }))
        }

        pub fn call_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        pub fn last_request(&self) -> OutboundRequest {
            self.requests.lock().unwrap().last().cloned().expect("no request recorded")
        }
    }

    fn reason_for(status: u16) -> &'static str {
        match status {
            200 => "OK",
            400 => "Bad Request",
            401 => "Unauthorized",
            404 => "Not Found",
            500 => "Internal Server Error",
            503 => "Service Unavailable",
            _ => "",
        }
    }

    #[async_trait::async_trait]
    impl HttpClient for MockHttpClient {
        async fn send(
            &self,
            request: OutboundRequest,
        ) -> Result<UpstreamResponse, TransportFailure> {
            self.requests.lock().unwrap().push(request.clone());
            match &self.reply {
                Reply::Respond(response) => Ok(response.clone()),
                Reply::EchoBody => Ok(UpstreamResponse {
                    status: 200,
                    reason: "OK".into(),
                    body: request.body.unwrap_or_default().into_bytes(),
                }),
                Reply::Fail(message) => Err(TransportFailure(message.clone())),
            }
        }
    }
}
