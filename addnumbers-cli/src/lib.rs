//! AddNumbers CLI Library
//!
//! Command-line definitions and command implementations for the `addnumbers`
//! binary, exposed as a library for tests.

/// Addition command
pub mod add;
/// Command-line interface definitions and argument parsing
pub mod cli;
/// CLI error type carrying an exit code
pub mod error;
/// Exit codes used by the CLI application
pub mod exit_codes;
/// Logging setup for interactive and MCP modes
pub mod logging;
/// Tool listing command
pub mod tools;
