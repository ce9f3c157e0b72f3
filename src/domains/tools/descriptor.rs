//! Endpoint descriptors.
//!
//! A descriptor is static metadata for one upstream HTTP operation: method,
//! path, declared parameters and a description shown to clients. The whole
//! tool surface of the server is a table of these (see `definitions/`); the
//! gateway and executor are generic over it.

use std::fmt;

use rmcp::model::ToolAnnotations;

/// HTTP methods used by the quotes API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
        }
    }

    /// Whether requests with this method carry a JSON payload.
    pub fn has_body(&self) -> bool {
        !matches!(self, Self::Get)
    }

    /// MCP tool hints derived from the method's HTTP semantics.
    pub fn annotations(&self) -> ToolAnnotations {
        let (read_only, destructive, idempotent) = match self {
            Self::Get => (true, false, Some(true)),
            Self::Post => (false, false, Some(false)),
            Self::Put => (false, true, Some(true)),
            // PATCH may or may not be idempotent; do not guess.
            Self::Patch => (false, true, None),
        };

        ToolAnnotations {
            title: None,
            read_only_hint: Some(read_only),
            destructive_hint: Some(destructive),
            idempotent_hint: idempotent,
            open_world_hint: Some(true),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
        }
    }
}

/// Declared type of a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    Boolean,
}

impl ParamKind {
    /// JSON Schema type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a parameter travels in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Query,
    Body,
}

/// One declared parameter of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub placement: Placement,
    pub description: &'static str,
}

impl ParamSpec {
    /// Optional query-string parameter.
    pub const fn query(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            placement: Placement::Query,
            description,
        }
    }

    /// Optional JSON body parameter.
    pub const fn body(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            placement: Placement::Body,
            description,
        }
    }

    /// Mark the parameter as required.
    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }
}

/// Static description of one callable upstream operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// Unique tool name used for dispatch.
    pub name: &'static str,
    pub method: HttpMethod,
    /// Path relative to the API base URL, starting with `/`.
    pub path: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
}

impl EndpointDescriptor {
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn required_params(&self) -> impl Iterator<Item = &ParamSpec> {
        self.params.iter().filter(|p| p.required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: &[ParamSpec] = &[
        ParamSpec::query("id", ParamKind::String, "Quote ID").required(),
        ParamSpec::query("limit", ParamKind::Number, "Max results"),
    ];

    const DESCRIPTOR: EndpointDescriptor = EndpointDescriptor {
        name: "get-quote",
        method: HttpMethod::Get,
        path: "/quote",
        description: "Gets a quote",
        params: PARAMS,
    };

    #[test]
    fn test_param_builders() {
        let p = ParamSpec::body("quote", ParamKind::String, "Quote").required();
        assert!(p.required);
        assert_eq!(p.placement, Placement::Body);
        assert!(!ParamSpec::query("x", ParamKind::Boolean, "").required);
    }

    #[test]
    fn test_descriptor_lookup() {
        assert_eq!(DESCRIPTOR.param("limit").map(|p| p.kind), Some(ParamKind::Number));
        assert!(DESCRIPTOR.param("missing").is_none());
        let required: Vec<_> = DESCRIPTOR.required_params().map(|p| p.name).collect();
        assert_eq!(required, vec!["id"]);
    }

    #[test]
    fn test_method_semantics() {
        assert!(!HttpMethod::Get.has_body());
        assert!(HttpMethod::Patch.has_body());
        assert_eq!(HttpMethod::Get.annotations().read_only_hint, Some(true));
        assert_eq!(HttpMethod::Patch.annotations().idempotent_hint, None);
        assert_eq!(reqwest::Method::from(HttpMethod::Put), reqwest::Method::PUT);
    }
}
