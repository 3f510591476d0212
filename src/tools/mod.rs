//! Tools module — capabilities the model can invoke.
//!
//! Tools are pure computations the model may request by name during a turn.
//! The registry declares their schemas to the completion service and
//! dispatches requests back to them.

mod quote;
mod registry;

pub use quote::QuoteTool;
pub use registry::{ToolDefinition, ToolRegistry};

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

/// Tool trait — interface for all registered capabilities
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name used in tool-use requests
    fn name(&self) -> &str;

    /// Description of what the tool does
    fn description(&self) -> &str;

    /// JSON Schema for parameters
    fn parameters(&self) -> Value;

    /// Execute the tool with given parameters
    async fn execute(&self, params: Value) -> Result<String>;

    /// Convert to tool definition for the completion service
    fn to_definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
        }
    }
}

/// Dummy tool for testing
#[cfg(test)]
pub(crate) struct DummyTool {
    pub name: String,
    pub result: String,
}

#[cfg(test)]
#[async_trait]
impl Tool for DummyTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Dummy tool for testing"
    }

    fn parameters(&self) -> Value {
        serde_json::json!({"type": "object"})
    }

    async fn execute(&self, _params: Value) -> Result<String> {
        Ok(self.result.clone())
    }
}
