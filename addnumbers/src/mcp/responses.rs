//! Response creation utilities for MCP operations

use super::tool_registry::BaseToolImpl;
use crate::arithmetic::AdditionResult;
use crate::AddNumbersError;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Create a success response carrying an addition record as pretty JSON
pub fn create_addition_response(
    sum: &AdditionResult,
) -> std::result::Result<CallToolResult, McpError> {
    let body = serde_json::to_string_pretty(sum).map_err(|e| {
        McpError::internal_error(format!("Failed to serialize addition result: {e}"), None)
    })?;
    Ok(BaseToolImpl::create_success_response(body))
}

/// Map a library error onto the MCP boundary
///
/// Caller mistakes become tool-level error results the client can show;
/// anything else is a protocol-level internal error.
pub fn map_error_to_result(
    error: AddNumbersError,
) -> std::result::Result<CallToolResult, McpError> {
    if error.is_user_error() {
        Ok(BaseToolImpl::create_error_response(error.to_string(), None))
    } else {
        Err(McpError::internal_error(error.to_string(), None))
    }
}
