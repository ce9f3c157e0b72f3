//! Gateway - discovery and dispatch of tool invocations.
//!
//! `call_tool` runs the same pipeline for every tool: look the descriptor
//! up, validate the arguments, resolve credentials, then hand over to the
//! [`RequestExecutor`]. Every path ends in exactly one [`InvocationResult`].
//! The gateway holds no per-call state and is shared behind an `Arc`.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::OnceCell;
use tracing::{info, instrument, warn};

use super::error::ToolError;
use super::executor::RequestExecutor;
use super::registry::{ToolRegistry, ToolSummary};
use super::validation::{JsonObject, validate_arguments};
use crate::core::credentials::{CredentialResolver, Credentials};

/// Outcome of one tool call: response text or a typed failure.
pub type InvocationResult = Result<String, ToolError>;

pub struct Gateway {
    registry: ToolRegistry,
    executor: RequestExecutor,
    resolver: Arc<dyn CredentialResolver>,
    credentials: OnceCell<Credentials>,
}

impl Gateway {
    pub fn new(
        registry: ToolRegistry,
        executor: RequestExecutor,
        resolver: Arc<dyn CredentialResolver>,
    ) -> Self {
        Self {
            registry,
            executor,
            resolver,
            credentials: OnceCell::new(),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Discovery summaries in registration order.
    pub fn list_tools(&self) -> impl Iterator<Item = ToolSummary> + Clone + use<> {
        self.registry.list_tools()
    }

    /// Validate and dispatch one invocation.
    #[instrument(skip(self, arguments), fields(tool = %name))]
    pub async fn call_tool(&self, name: &str, arguments: Option<JsonObject>) -> InvocationResult {
        let result = self.dispatch(name, arguments.unwrap_or_default()).await;
        match &result {
            Ok(text) => info!(bytes = text.len(), "Tool call succeeded"),
            Err(e) => warn!(kind = %e.kind(), "Tool call failed: {}", e),
        }
        result
    }

    async fn dispatch(&self, name: &str, arguments: JsonObject) -> InvocationResult {
        let descriptor = self
            .registry
            .get(name)
            .ok_or_else(|| ToolError::unknown_tool(name))?;

        let arguments = validate_arguments(descriptor, &arguments)?;
        let credentials = self.credentials().await?;

        AssertUnwindSafe(self.executor.execute(descriptor, &arguments, credentials))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| {
                let message = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "executor panicked".to_string());
                Err(ToolError::execution(name, message))
            })
    }

    /// Resolve credentials once; later calls reuse the first success.
    async fn credentials(&self) -> Result<&Credentials, ToolError> {
        self.credentials
            .get_or_try_init(|| async {
                self.resolver
                    .resolve()
                    .map_err(|e| ToolError::configuration(e.to_string()))
            })
            .await
    }
}
