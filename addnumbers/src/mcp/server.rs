//! MCP server implementation for serving the addition tool

use crate::config::Config;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use std::sync::Arc;

use super::tool_registry::{register_math_tools, ToolContext, ToolRegistry};

const INSTRUCTIONS: &str = "An arithmetic tool server. Use list_tools to discover tools and call add_numbers with two integers, number1 and number2, to get their sum along with a readable expression such as \"2 + 3 = 5\".";

/// MCP server exposing registered tools
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,
    tool_registry: Arc<ToolRegistry>,
    /// Tool context containing shared state for tool execution
    pub tool_context: Arc<ToolContext>,
}

impl McpServer {
    /// Create a new MCP server with every built-in tool registered.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        let mut tool_registry = ToolRegistry::new();
        register_math_tools(&mut tool_registry);

        tracing::debug!(
            "Registered {} tools: {:?}",
            tool_registry.len(),
            tool_registry.list_tool_names()
        );

        Self {
            tool_context: Arc::new(ToolContext::new(config.clone())),
            tool_registry: Arc::new(tool_registry),
            config,
        }
    }

    /// Configuration the server was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Names of all registered tools, sorted
    pub fn list_tool_names(&self) -> Vec<String> {
        self.tool_registry.list_tool_names()
    }

    /// Invoke a registered tool by name.
    ///
    /// # Errors
    ///
    /// Returns `invalid_request` for an unknown tool, and whatever the tool
    /// itself reports for bad arguments.
    pub async fn call_tool_by_name(
        &self,
        name: &str,
        arguments: Option<serde_json::Map<String, serde_json::Value>>,
    ) -> std::result::Result<CallToolResult, McpError> {
        match self.tool_registry.get_tool(name) {
            Some(tool) => {
                tracing::info!("Calling tool '{}'", name);
                tool.execute(arguments.unwrap_or_default(), &self.tool_context)
                    .await
            }
            None => {
                tracing::warn!("Client requested unknown tool '{}'", name);
                Err(McpError::invalid_request(
                    format!("Unknown tool: {name}"),
                    None,
                ))
            }
        }
    }

    fn capabilities() -> ServerCapabilities {
        ServerCapabilities {
            prompts: None,
            tools: Some(ToolsCapability {
                list_changed: Some(false),
            }),
            resources: None,
            logging: None,
            completions: None,
            experimental: None,
        }
    }

    fn implementation(&self) -> Implementation {
        Implementation {
            name: self.config.server_name.clone().into(),
            version: crate::VERSION.into(),
        }
    }
}

impl ServerHandler for McpServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );

        Ok(self.get_info())
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.call_tool_by_name(&request.name, request.arguments)
            .await
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            server_info: self.implementation(),
            instructions: Some(INSTRUCTIONS.into()),
        }
    }
}
