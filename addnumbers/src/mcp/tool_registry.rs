//! Tool registry for MCP operations
//!
//! Tools are registered explicitly into a [`ToolRegistry`] when the server is
//! built; the registry maps each external tool name to its implementation,
//! description and argument schema.

use crate::arithmetic::OverflowPolicy;
use crate::config::Config;
use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent, Tool};
use rmcp::Error as McpError;
use std::collections::HashMap;
use std::sync::Arc;

/// Context shared by all tools during execution
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Effective configuration for this server
    pub config: Arc<Config>,
}

impl ToolContext {
    /// Create a new tool context
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Overflow policy tools should apply
    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.config.overflow_policy
    }
}

/// Trait defining the interface for all MCP tools
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Get the tool's name
    fn name(&self) -> &'static str;

    /// Get the tool's description
    fn description(&self) -> &'static str;

    /// Get the tool's JSON schema for arguments
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments and context
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;
}

/// Registry for managing MCP tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool, replacing any tool already registered under the same name
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), Box::new(tool)).is_some() {
            tracing::warn!("Tool '{}' registered twice, keeping the latest", name);
        }
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// List all registered tool names, sorted
    pub fn list_tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get all registered tools as Tool objects for the MCP list_tools response
    pub fn list_tools(&self) -> Vec<Tool> {
        self.list_tool_names()
            .iter()
            .filter_map(|name| self.get_tool(name))
            .map(|tool| {
                let schema_map = match tool.schema() {
                    serde_json::Value::Object(map) => map,
                    _ => serde_json::Map::new(),
                };

                Tool {
                    name: tool.name().into(),
                    description: Some(tool.description().into()),
                    input_schema: Arc::new(schema_map),
                    annotations: None,
                }
            })
            .collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Common helpers for MCP tool implementations
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Bind a JSON argument map to a typed request
    ///
    /// Missing, mistyped or unknown arguments are reported as `invalid_params`.
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<T, McpError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| McpError::invalid_params(format!("Invalid arguments: {e}"), None))
    }

    /// Create a success response with text content
    pub fn create_success_response<T: Into<String>>(content: T) -> CallToolResult {
        CallToolResult {
            content: vec![Annotated::new(
                RawContent::Text(RawTextContent {
                    text: content.into(),
                }),
                None,
            )],
            is_error: Some(false),
        }
    }

    /// Create an error response, appending `details` after a colon when given
    pub fn create_error_response<T: Into<String>>(
        error: T,
        details: Option<String>,
    ) -> CallToolResult {
        let error_text = match details {
            Some(details) => format!("{}: {}", error.into(), details),
            None => error.into(),
        };

        CallToolResult {
            content: vec![Annotated::new(
                RawContent::Text(RawTextContent { text: error_text }),
                None,
            )],
            is_error: Some(true),
        }
    }
}

/// Register all arithmetic tools with the registry
pub fn register_math_tools(registry: &mut ToolRegistry) {
    use crate::mcp::tools::math;
    math::register_math_tools(registry);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockTool {
        name: &'static str,
        description: &'static str,
    }

    #[async_trait::async_trait]
    impl McpTool for MockTool {
        fn name(&self) -> &'static str {
            self.name
        }

        fn description(&self) -> &'static str {
            self.description
        }

        fn schema(&self) -> serde_json::Value {
            serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            })
        }

        async fn execute(
            &self,
            _arguments: serde_json::Map<String, serde_json::Value>,
            _context: &ToolContext,
        ) -> std::result::Result<CallToolResult, McpError> {
            Ok(BaseToolImpl::create_success_response(format!(
                "Mock tool {} executed",
                self.name
            )))
        }
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text_content) => &text_content.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_tool_registry_creation() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.list_tools().is_empty());
    }

    #[test]
    fn test_tool_registration_and_lookup() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool {
            name: "lookup_test",
            description: "A lookup test tool",
        });

        assert_eq!(registry.len(), 1);
        let tool = registry.get_tool("lookup_test").unwrap();
        assert_eq!(tool.name(), "lookup_test");
        assert_eq!(tool.description(), "A lookup test tool");
        assert!(registry.get_tool("nonexistent").is_none());
    }

    #[test]
    fn test_duplicate_registration_replaces() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool {
            name: "dup",
            description: "first",
        });
        registry.register(MockTool {
            name: "dup",
            description: "second",
        });

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get_tool("dup").unwrap().description(), "second");
    }

    #[test]
    fn test_list_tools_is_sorted() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool {
            name: "zeta",
            description: "last",
        });
        registry.register(MockTool {
            name: "alpha",
            description: "first",
        });

        assert_eq!(registry.list_tool_names(), vec!["alpha", "zeta"]);

        let tools = registry.list_tools();
        assert_eq!(tools[0].name, "alpha");
        assert_eq!(tools[1].name, "zeta");
        assert_eq!(tools[0].input_schema.get("type").unwrap(), "object");
    }

    #[tokio::test]
    async fn test_tool_execution() {
        let context = ToolContext::new(Arc::new(Config::default()));
        let tool = MockTool {
            name: "exec_test",
            description: "Execution test tool",
        };

        let result = tool.execute(serde_json::Map::new(), &context).await.unwrap();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text_of(&result), "Mock tool exec_test executed");
    }

    #[test]
    fn test_context_exposes_policy() {
        let config = Config {
            overflow_policy: OverflowPolicy::Saturate,
            ..Config::default()
        };
        let context = ToolContext::new(Arc::new(config));
        assert_eq!(context.overflow_policy(), OverflowPolicy::Saturate);
    }

    #[test]
    fn test_parse_arguments() {
        #[derive(serde::Deserialize, PartialEq, Debug)]
        struct TestArgs {
            name: String,
            count: Option<i32>,
        }

        let mut args = serde_json::Map::new();
        args.insert("name".to_string(), serde_json::json!("test"));
        args.insert("count".to_string(), serde_json::json!(42));

        let parsed: TestArgs = BaseToolImpl::parse_arguments(args).unwrap();
        assert_eq!(parsed.name, "test");
        assert_eq!(parsed.count, Some(42));
    }

    #[test]
    fn test_parse_arguments_error() {
        #[derive(serde::Deserialize, Debug)]
        struct TestArgs {
            #[serde(rename = "required_field")]
            _required_field: String,
        }

        let err = BaseToolImpl::parse_arguments::<TestArgs>(serde_json::Map::new()).unwrap_err();
        assert!(err.message.starts_with("Invalid arguments:"));
    }

    #[test]
    fn test_create_error_response_with_details() {
        let response = BaseToolImpl::create_error_response(
            "Error message",
            Some("Additional details".to_string()),
        );

        assert_eq!(response.is_error, Some(true));
        assert_eq!(text_of(&response), "Error message: Additional details");

        let plain = BaseToolImpl::create_error_response("Error message", None);
        assert_eq!(text_of(&plain), "Error message");
    }
}
