//! MCP tool implementations, grouped by noun

pub mod math;
