use addnumbers::OverflowPolicy;
use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::io;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverflowArg {
    Error,
    Wrap,
    Saturate,
}

impl From<OverflowArg> for OverflowPolicy {
    fn from(arg: OverflowArg) -> Self {
        match arg {
            OverflowArg::Error => OverflowPolicy::Error,
            OverflowArg::Wrap => OverflowPolicy::Wrap,
            OverflowArg::Saturate => OverflowPolicy::Saturate,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "addnumbers")]
#[command(version)]
#[command(about = "An MCP server that adds two integers")]
#[command(long_about = "
addnumbers is an MCP (Model Context Protocol) server exposing a single
add_numbers tool. It can also run the addition directly from the shell.

Example usage:
  addnumbers serve          # Run as MCP server over stdio
  addnumbers add 2 3        # Prints: 2 + 3 = 5
  addnumbers tools          # List the tools the server registers
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (trace level, the most detailed)
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging (less detailed than --verbose)
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server over stdio
    #[command(long_about = "
Runs addnumbers as an MCP server speaking JSON-RPC over stdin/stdout.
Logs are written to ~/.addnumbers/mcp.log (override the file name with
ADDNUMBERS_LOG_FILE) so they never mix with protocol traffic.

Configuration is read from ADDNUMBERS_* environment variables and an
optional addnumbers.yaml file.

Example:
  addnumbers serve
  # Or configure it as a stdio server in your MCP client settings
")]
    Serve,
    /// Add two integers
    #[command(long_about = "
Adds two 64-bit signed integers and prints the result.

Output formats:
  text  - The expression, e.g. 2 + 3 = 5 (default)
  json  - The full result record

Exit codes:
  0 - Success
  2 - The sum overflowed under the error policy

Examples:
  addnumbers add 2 3
  addnumbers add -5 5 --format json
  addnumbers add 9223372036854775807 1 --overflow wrap
")]
    Add {
        /// The first number
        #[arg(allow_negative_numbers = true)]
        number1: i64,

        /// The second number
        #[arg(allow_negative_numbers = true)]
        number2: i64,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Overflow handling, overriding configuration
        #[arg(long, value_enum)]
        overflow: Option<OverflowArg>,
    },
    /// List the tools served over MCP
    Tools {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    #[allow(dead_code)]
    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }

    /// MCP mode is `serve` with a non-interactive stdin
    pub fn is_mcp_mode(&self) -> bool {
        matches!(self.command, Some(Commands::Serve)) && !io::stdin().is_terminal()
    }
}
