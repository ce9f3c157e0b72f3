//! HTTP transport implementation.
//!
//! JSON-RPC over POST for plain HTTP clients (curl, browsers, scripts).
//! Only the tools capability is served; each request is independent.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use rmcp::ErrorData as McpError;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::domains::tools::JsonObject;

const PROTOCOL_VERSION: &str = "2024-11-05";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Carry an rmcp error over unchanged (code, message and data).
    pub fn from_mcp_error(id: Option<Value>, err: McpError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code: err.code.0,
                message: err.message.into_owned(),
                data: err.data,
            }),
        }
    }

    pub fn method_not_found(id: Option<Value>) -> Self {
        Self::error(id, -32601, "Method not found")
    }

    pub fn invalid_request(id: Option<Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    pub fn invalid_params(id: Option<Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }
}

impl HttpTransport {
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Build the axum application serving `server`.
    pub fn router(&self, server: McpServer) -> Router {
        let mut app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(server)
            .layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport until the listener fails.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.config.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "Ready - listening on {} (JSON-RPC over HTTP, CORS {})",
            addr,
            if self.config.enable_cors { "enabled" } else { "disabled" }
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))
    }
}

/// Root handler - provides API info.
async fn root_handler(State(server): State<McpServer>) -> impl IntoResponse {
    Json(json!({
        "name": server.name(),
        "version": server.version(),
        "transport": "HTTP",
        "tools": server.tool_count(),
        "protocol": "JSON-RPC 2.0",
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(server): State<McpServer>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    tracing::Span::current().record("method", request.method.as_str());
    debug!("Received JSON-RPC request: {}", request.method);

    (StatusCode::OK, Json(process_request(&server, request).await))
}

async fn process_request(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::invalid_request(request.id);
    }

    match request.method.as_str() {
        "initialize" => handle_initialize(server, request),
        "ping" => JsonRpcResponse::success(request.id, json!({})),
        "tools/list" => handle_tools_list(server, request),
        "tools/call" => handle_tools_call(server, request).await,
        method if method.starts_with("notifications/") => {
            debug!("Received notification: {}", method);
            JsonRpcResponse::success(request.id, Value::Null)
        }
        _ => {
            warn!("Unknown method: {}", request.method);
            JsonRpcResponse::method_not_found(request.id)
        }
    }
}

fn handle_initialize(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing initialize request");

    JsonRpcResponse::success(
        request.id,
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {} },
            "serverInfo": {
                "name": server.name(),
                "version": server.version()
            },
            "instructions": server.instructions()
        }),
    )
}

fn handle_tools_list(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    JsonRpcResponse::success(request.id, json!({ "tools": server.list_tools() }))
}

async fn handle_tools_call(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    let Some(params) = request.params else {
        return JsonRpcResponse::invalid_params(request.id, "Missing params");
    };

    let Some(name) = params.get("name").and_then(Value::as_str) else {
        return JsonRpcResponse::invalid_params(request.id, "Missing tool name");
    };

    let arguments: Option<JsonObject> = match params.get("arguments") {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(map.clone()),
        Some(_) => {
            return JsonRpcResponse::invalid_params(request.id, "arguments must be an object");
        }
    };

    match server.call_tool(name, arguments).await {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(e) => JsonRpcResponse::from_mcp_error(request.id, e),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bytes::Bytes;
    use http::{Request, header};
    use http_body_util::{BodyExt, Full};
    use tower::ServiceExt;

    use super::*;
    use crate::core::Config;
    use crate::core::credentials::Credentials;
    use crate::domains::tools::executor::testing::MockHttpClient;
    use crate::domains::tools::{Gateway, RequestExecutor, ToolRegistry};

    fn app(client: Arc<MockHttpClient>) -> Router {
        let gateway = Gateway::new(
            ToolRegistry::quotes_api().unwrap(),
            RequestExecutor::new(client),
            Arc::new(Credentials::new("https://api.example.com", "tok").unwrap()),
        );
        let server = McpServer::new(Config::default(), Arc::new(gateway));
        HttpTransport::new(HttpConfig::default()).router(server)
    }

    async fn rpc(app: Router, body: Value) -> Value {
        let request = Request::post("/mcp")
            .header(header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::new(Full::new(Bytes::from(body.to_string()))))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_initialize_advertises_tools_only() {
        let response = rpc(
            app(MockHttpClient::json(200, "{}")),
            json!({ "jsonrpc": "2.0", "id": 1, "method": "initialize" }),
        )
        .await;
        let capabilities = &response["result"]["capabilities"];
        assert!(capabilities["tools"].is_object());
        assert!(capabilities.get("resources").is_none());
        assert_eq!(response["result"]["serverInfo"]["name"], "quotes-mcp-server");
    }

    #[tokio::test]
    async fn test_tools_list() {
        let response = rpc(
            app(MockHttpClient::json(200, "{}")),
            json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" }),
        )
        .await;
        let tools = response["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 38);
        assert_eq!(tools[0]["name"], "patch-quote");
        assert!(tools[0]["inputSchema"]["properties"].is_object());
    }

    #[tokio::test]
    async fn test_tools_call_success() {
        let client = MockHttpClient::json(200, r#"{"contents":{"quote":"Be yourself"}}"#);
        let response = rpc(
            app(client.clone()),
            json!({
                "jsonrpc": "2.0",
                "id": 3,
                "method": "tools/call",
                "params": { "name": "get-quote-random", "arguments": { "language": "en" } }
            }),
        )
        .await;
        let content = &response["result"]["content"];
        assert_eq!(content[0]["type"], "text");
        assert!(content[0]["text"].as_str().unwrap().contains("Be yourself"));
        assert_eq!(
            client.last_request().url,
            "https://api.example.com/quote/random?language=en"
        );
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool() {
        let client = MockHttpClient::json(200, "{}");
        let response = rpc(
            app(client.clone()),
            json!({
                "jsonrpc": "2.0",
                "id": 4,
                "method": "tools/call",
                "params": { "name": "nonexistent" }
            }),
        )
        .await;
        assert_eq!(response["error"]["code"], -32602);
        assert_eq!(response["error"]["data"]["kind"], "UnknownTool");
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_tools_call_upstream_error() {
        let response = rpc(
            app(MockHttpClient::json(500, "boom")),
            json!({
                "jsonrpc": "2.0",
                "id": 5,
                "method": "tools/call",
                "params": { "name": "get-qod" }
            }),
        )
        .await;
        assert_eq!(response["error"]["code"], -32603);
        assert_eq!(response["error"]["data"]["status"], 500);
    }

    #[tokio::test]
    async fn test_unknown_method_and_bad_version() {
        let response = rpc(
            app(MockHttpClient::json(200, "{}")),
            json!({ "jsonrpc": "2.0", "id": 6, "method": "resources/list" }),
        )
        .await;
        assert_eq!(response["error"]["code"], -32601);

        let response = rpc(
            app(MockHttpClient::json(200, "{}")),
            json!({ "jsonrpc": "1.0", "id": 7, "method": "ping" }),
        )
        .await;
        assert_eq!(response["error"]["code"], -32600);
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::get("/health").body(axum::body::Body::empty()).unwrap();
        let response = app(MockHttpClient::json(200, "{}"))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
    }
}
