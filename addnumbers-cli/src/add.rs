use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::exit_codes::EXIT_WARNING;
use addnumbers::{add_with_policy, AdditionResult, Config, OverflowPolicy};

/// Add two numbers and print the result.
///
/// `overflow` overrides the configured policy when given.
pub fn run_add_command(
    number1: i64,
    number2: i64,
    format: OutputFormat,
    overflow: Option<OverflowPolicy>,
) -> CliResult<()> {
    let policy = overflow.unwrap_or_else(|| Config::new().overflow_policy);
    tracing::debug!("Adding {} and {} with policy {}", number1, number2, policy);

    let sum = add_with_policy(number1, number2, policy)?;
    println!("{}", render_addition(&sum, format)?);
    Ok(())
}

/// Render an addition result in the requested format
pub fn render_addition(sum: &AdditionResult, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(sum.operation.clone()),
        OutputFormat::Json => serde_json::to_string_pretty(sum)
            .map_err(|e| CliError::from_error(e, EXIT_WARNING)),
    }
}
