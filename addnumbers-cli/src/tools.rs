use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::exit_codes::EXIT_WARNING;
use addnumbers::mcp::{register_math_tools, ToolRegistry};
use rmcp::model::Tool;

/// Print every tool the MCP server registers
pub fn run_tools_command(format: OutputFormat) -> CliResult<()> {
    let mut registry = ToolRegistry::new();
    register_math_tools(&mut registry);

    println!("{}", render_tools(&registry.list_tools(), format)?);
    Ok(())
}

/// Render tools as `name - headline` lines or as the MCP JSON listing
pub fn render_tools(tools: &[Tool], format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(tools
            .iter()
            .map(|tool| {
                let headline = tool
                    .description
                    .as_deref()
                    .and_then(|d| d.lines().next())
                    .unwrap_or_default();
                format!("{} - {}", tool.name, headline)
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(tools)
            .map_err(|e| CliError::from_error(e, EXIT_WARNING)),
    }
}
