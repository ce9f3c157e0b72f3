//! Tools domain module.
//!
//! Every tool is one upstream endpoint of the quotes API. Tools are data,
//! not code: a table of [`EndpointDescriptor`]s drives validation, request
//! building and discovery, so the server has a single generic dispatch path.
//!
//! ## Architecture
//!
//! - `descriptor.rs` - Endpoint descriptor types
//! - `definitions/` - The descriptor table, grouped by API area
//! - `validation.rs` - Argument checks and input schemas
//! - `executor.rs` - Builds and sends upstream requests, normalizes responses
//! - `registry.rs` - Lookup and discovery over the descriptor table
//! - `gateway.rs` - Lookup, validation, credentials and execution per call
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Declare a `const EndpointDescriptor` in the matching `definitions/` file
//! 2. Append it to `DESCRIPTORS` in `definitions/mod.rs`
//!
//! Router, registry and HTTP transport pick it up from the table.

pub mod definitions;
pub mod descriptor;
mod error;
pub mod executor;
pub mod gateway;
pub mod registry;
pub mod router;
pub mod validation;

pub use definitions::DESCRIPTORS;
pub use descriptor::{EndpointDescriptor, HttpMethod, ParamKind, ParamSpec, Placement};
pub use error::{ErrorKind, HttpErrorClass, ToolError};
pub use executor::{HttpClient, RequestExecutor, ReqwestHttpClient};
pub use gateway::{Gateway, InvocationResult};
pub use registry::{ToolRegistry, ToolSummary};
pub use router::{build_tool_router, to_call_result, to_mcp_error};
pub use validation::JsonObject;
