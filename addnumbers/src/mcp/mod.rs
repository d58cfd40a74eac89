//! Model Context Protocol (MCP) server support
//!
//! This module exposes the addition operation as an MCP tool: a registry of
//! tools, the request types they bind arguments to, and an `rmcp` server
//! handler that dispatches `tools/list` and `tools/call`.

pub mod responses;
pub mod server;
pub mod tool_descriptions;
pub mod tool_registry;
pub mod tools;
pub mod types;


pub use server::McpServer;
pub use tool_registry::{register_math_tools, McpTool, ToolContext, ToolRegistry};
pub use types::AddNumbersRequest;
