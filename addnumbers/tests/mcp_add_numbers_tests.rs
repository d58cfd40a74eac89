//! Integration tests for the add_numbers MCP tool through the public API

use addnumbers::mcp::{register_math_tools, McpServer, ToolRegistry};
use addnumbers::{Config, OverflowPolicy};
use rmcp::model::RawContent;
use serde_json::json;

#[test]
fn test_listed_tool_wire_format() {
    let mut registry = ToolRegistry::new();
    register_math_tools(&mut registry);

    let tools = registry.list_tools();
    assert_eq!(tools.len(), 1);

    let wire = serde_json::to_value(&tools[0]).unwrap();
    assert_eq!(wire["name"], "add_numbers");
    assert!(wire["description"]
        .as_str()
        .unwrap()
        .starts_with("Add two numbers together and return the result"));
    assert_eq!(wire["inputSchema"]["required"], json!(["number1", "number2"]));
}

#[tokio::test]
async fn test_call_result_wire_format() {
    let server = McpServer::new(Config::default());
    let result = server
        .call_tool_by_name(
            "add_numbers",
            json!({"number1": -5, "number2": 5}).as_object().cloned(),
        )
        .await
        .unwrap();

    let wire = serde_json::to_value(&result).unwrap();
    assert_eq!(wire["isError"], false);
    assert_eq!(wire["content"][0]["type"], "text");

    let RawContent::Text(text) = &result.content[0].raw else {
        panic!("Expected text content");
    };
    let record: addnumbers::AdditionResult = serde_json::from_str(&text.text).unwrap();
    assert_eq!(record, addnumbers::add(-5, 5).unwrap());
}

#[tokio::test]
async fn test_wrapping_server() {
    let server = McpServer::new(Config {
        overflow_policy: OverflowPolicy::Wrap,
        ..Config::default()
    });
    assert_eq!(server.config().overflow_policy, OverflowPolicy::Wrap);

    let result = server
        .call_tool_by_name(
            "add_numbers",
            json!({"number1": i64::MAX, "number2": 2}).as_object().cloned(),
        )
        .await
        .unwrap();
    assert_eq!(result.is_error, Some(false));
}
