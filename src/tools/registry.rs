//! Tool registry — name-based lookup and dispatch.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::Error;
use crate::Result;

use super::quote::QuoteTool;
use super::Tool;

/// Tool definition sent to the completion service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Registry of tools the model may invoke.
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Create a registry with the default tool set
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(QuoteTool::new());
        registry
    }

    /// Register a tool
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    /// Tool definitions for the completion request's schema declaration
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|t| t.to_definition()).collect()
    }

    /// Dispatch a tool request by name.
    ///
    /// An unknown name is a contract mismatch between the declared schema
    /// and this registry; it aborts the turn instead of being swallowed.
    pub async fn dispatch(&self, name: &str, params: Value) -> Result<String> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| Error::UnknownTool(name.to_string()))?;

        debug!("Dispatching tool: {}", name);
        tool.execute(params).await
    }

    /// Check if a tool exists
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// List registered tool names
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::DummyTool;

    #[tokio::test]
    async fn test_register_and_dispatch() {
        let mut registry = ToolRegistry::new();
        registry.register(DummyTool {
            name: "test_tool".to_string(),
            result: "success".to_string(),
        });

        assert!(registry.has("test_tool"));

        let result = registry
            .dispatch("test_tool", serde_json::json!({}))
            .await
            .unwrap();
        assert_eq!(result, "success");
    }

    #[tokio::test]
    async fn test_unknown_tool_never_returns_a_value() {
        let registry = ToolRegistry::with_defaults();
        let result = registry.dispatch("unknown", serde_json::json!({})).await;
        assert!(matches!(result, Err(Error::UnknownTool(name)) if name == "unknown"));
    }

    #[test]
    fn test_default_registry_declares_the_quote_tool() {
        let registry = ToolRegistry::with_defaults();
        let definitions = registry.definitions();

        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions[0].name, "get_quote");
        assert_eq!(definitions[0].parameters["type"], "object");
    }
}
