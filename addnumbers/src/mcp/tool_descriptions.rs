//! Tool descriptions registry for MCP operations
//!
//! Each tool keeps its long-form description in a `description.md` file next
//! to its implementation; the files are embedded at compile time.

/// Embedded descriptions keyed by `<noun>_<verb>`
const TOOL_DESCRIPTIONS: &[(&str, &str)] = &[(
    "math_add_numbers",
    include_str!("tools/math/add_numbers/description.md"),
)];

/// Get description for a specific tool path, e.g. `math_add_numbers`
pub fn get_description(tool_path: &str) -> Option<&'static str> {
    TOOL_DESCRIPTIONS
        .iter()
        .find(|(path, _)| *path == tool_path)
        .map(|(_, description)| description.trim())
}

/// Get description for a tool by noun and verb
///
/// # Example
/// ```rust
/// use addnumbers::mcp::tool_descriptions::get_tool_description;
///
/// let desc = get_tool_description("math", "add_numbers");
/// assert!(desc.is_some());
/// ```
pub fn get_tool_description(noun: &str, verb: &str) -> Option<&'static str> {
    get_description(&format!("{noun}_{verb}"))
}
