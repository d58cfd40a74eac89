//! Integer addition tool for MCP operations
//!
//! This module provides the AddNumbersTool, the MCP face of [`crate::add_with_policy`].

use crate::arithmetic::add_with_policy;
use crate::mcp::responses::{create_addition_response, map_error_to_result};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::AddNumbersRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for adding two integers
#[derive(Default)]
pub struct AddNumbersTool;

impl AddNumbersTool {
    /// Creates a new instance of the AddNumbersTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AddNumbersTool {
    fn name(&self) -> &'static str {
        "add_numbers"
    }

    fn description(&self) -> &'static str {
        crate::mcp::tool_descriptions::get_tool_description("math", "add_numbers")
            .unwrap_or("Add two numbers together and return the result")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "number1": {
                    "type": "integer",
                    "description": "The first number to add"
                },
                "number2": {
                    "type": "integer",
                    "description": "The second number to add"
                }
            },
            "required": ["number1", "number2"],
            "additionalProperties": false
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: AddNumbersRequest = BaseToolImpl::parse_arguments(arguments)?;
        tracing::debug!(
            "add_numbers({}, {}) with overflow policy {}",
            request.number1,
            request.number2,
            context.overflow_policy()
        );

        match add_with_policy(request.number1, request.number2, context.overflow_policy()) {
            Ok(sum) => create_addition_response(&sum),
            Err(e) => {
                tracing::warn!("add_numbers failed: {}", e);
                map_error_to_result(e)
            }
        }
    }
}
