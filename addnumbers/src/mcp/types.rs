//! Request types for MCP operations

use serde::Deserialize;

/// Request to add two integers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AddNumbersRequest {
    /// The first number to add
    pub number1: i64,
    /// The second number to add
    pub number2: i64,
}
