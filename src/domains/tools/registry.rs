//! Tool Registry - the ordered, immutable set of endpoint descriptors.
//!
//! This module provides:
//! - Lookup of a descriptor by tool name
//! - Discovery summaries (name, description, input schema) in registration order
//! - Conversion of summaries into rmcp `Tool` models

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::Tool;

use super::definitions::DESCRIPTORS;
use super::descriptor::EndpointDescriptor;
use super::validation::{JsonObject, input_schema};
use crate::core::error::{Error, Result};

/// Discovery view of one registered tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSummary {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: JsonObject,
    descriptor: &'static EndpointDescriptor,
}

impl ToolSummary {
    fn new(descriptor: &'static EndpointDescriptor) -> Self {
        Self {
            name: descriptor.name,
            description: descriptor.description,
            input_schema: input_schema(descriptor),
            descriptor,
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            title: None,
            description: Some(self.description.into()),
            input_schema: Arc::new(self.input_schema.clone()),
            output_schema: None,
            annotations: Some(self.descriptor.method.annotations()),
            icons: None,
            meta: None,
        }
    }

    /// Discovery entry as exposed by the HTTP transport.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input_schema,
        })
    }
}

/// Registry of all tools, fixed at construction.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    descriptors: &'static [EndpointDescriptor],
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Build a registry over `descriptors`; names must be unique.
    pub fn new(descriptors: &'static [EndpointDescriptor]) -> Result<Self> {
        let mut index = HashMap::with_capacity(descriptors.len());
        for (position, descriptor) in descriptors.iter().enumerate() {
            if descriptor.name.is_empty() {
                return Err(Error::config("tool descriptor with an empty name"));
            }
            if index.insert(descriptor.name, position).is_some() {
                return Err(Error::config(format!(
                    "duplicate tool name: {}",
                    descriptor.name
                )));
            }
        }
        Ok(Self { descriptors, index })
    }

    /// Registry over the quotes API tool table.
    pub fn quotes_api() -> Result<Self> {
        Self::new(DESCRIPTORS)
    }

    pub fn get(&self, name: &str) -> Option<&'static EndpointDescriptor> {
        let descriptors = self.descriptors;
        self.index.get(name).map(|&position| &descriptors[position])
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Get all tool names, in registration order.
    pub fn tool_names(&self) -> impl Iterator<Item = &'static str> + Clone + use<> {
        let descriptors = self.descriptors;
        descriptors.iter().map(|d| d.name)
    }

    /// Discovery summaries, built on demand; clone the iterator to restart.
    pub fn list_tools(&self) -> impl Iterator<Item = ToolSummary> + Clone + use<> {
        let descriptors = self.descriptors;
        descriptors.iter().map(ToolSummary::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::descriptor::{HttpMethod, ParamKind, ParamSpec};

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::quotes_api().unwrap();
        let names: Vec<_> = registry.tool_names().collect();
        assert_eq!(names.len(), 38);
        assert_eq!(names.first(), Some(&"patch-quote"));
        assert_eq!(names.last(), Some(&"get-qod"));
        assert!(names.contains(&"get-quote-random"));
        assert!(names.contains(&"post-quote"));
        assert!(names.contains(&"put-quote-image"));
        assert!(names.contains(&"get-qshow-list"));
        assert!(names.contains(&"get-qod-languages"));
    }

    #[test]
    fn test_list_tools_one_entry_per_descriptor() {
        let registry = ToolRegistry::quotes_api().unwrap();
        let tools: Vec<_> = registry.list_tools().collect();
        assert_eq!(tools.len(), registry.len());
        for (summary, name) in tools.iter().zip(registry.tool_names()) {
            assert_eq!(summary.name, name);
            assert!(!summary.name.is_empty());
            assert!(!summary.description.is_empty());
        }
    }

    #[test]
    fn test_list_tools_restartable() {
        let registry = ToolRegistry::quotes_api().unwrap();
        let listing = registry.list_tools();
        let first: Vec<_> = listing.clone().map(|t| t.name).collect();
        let second: Vec<_> = listing.map(|t| t.name).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_lookup() {
        let registry = ToolRegistry::quotes_api().unwrap();
        let descriptor = registry.get("get-quote-search").unwrap();
        assert_eq!(descriptor.path, "/quote/search");
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        static DUPLICATES: &[EndpointDescriptor] = &[
            EndpointDescriptor {
                name: "get-thing",
                method: HttpMethod::Get,
                path: "/thing",
                description: "first",
                params: &[],
            },
            EndpointDescriptor {
                name: "get-thing",
                method: HttpMethod::Get,
                path: "/thing",
                description: "second",
                params: &[ParamSpec::query("id", ParamKind::String, "id")],
            },
        ];
        let err = ToolRegistry::new(DUPLICATES).unwrap_err();
        assert!(err.to_string().contains("duplicate tool name: get-thing"));
    }

    #[test]
    fn test_to_tool() {
        let registry = ToolRegistry::quotes_api().unwrap();
        let summary = registry.list_tools().find(|t| t.name == "get-quote").unwrap();
        let tool = summary.to_tool();
        assert_eq!(tool.name, "get-quote");
        assert_eq!(tool.input_schema["required"], serde_json::json!(["id"]));
        assert_eq!(
            tool.annotations.and_then(|a| a.read_only_hint),
            Some(true)
        );

        let json = summary.to_json();
        assert_eq!(json["name"], "get-quote");
        assert!(json["inputSchema"]["properties"]["id"].is_object());
    }
}
