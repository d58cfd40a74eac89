//! Arithmetic tools for MCP operations
//!
//! Each tool is in its own submodule with a dedicated implementation and
//! `description.md`.

pub mod add_numbers;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all arithmetic tools with the registry
pub fn register_math_tools(registry: &mut ToolRegistry) {
    registry.register(add_numbers::AddNumbersTool::new());
}
