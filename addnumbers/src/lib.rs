//! # AddNumbers
//!
//! Integer addition exposed as a Model Context Protocol (MCP) tool.
//!
//! ## Features
//!
//! - **Arithmetic core**: checked 64-bit addition producing a descriptive record
//! - **Overflow policies**: fail, wrap or saturate, selected through configuration
//! - **MCP support**: a tool registry and an `rmcp` server handler serving `add_numbers`
//!
//! ## Quick Start
//!
//! ```rust
//! use addnumbers::add;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sum = add(2, 3)?;
//! assert_eq!(sum.result, 5);
//! assert_eq!(sum.operation, "2 + 3 = 5");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Integer addition and overflow handling
pub mod arithmetic;

/// Shared helpers used across modules
pub mod common;

/// Configuration loaded from defaults, environment and YAML
pub mod config;

/// Error types used throughout the library
pub mod error;

/// Model Context Protocol (MCP) server support
pub mod mcp;

pub use arithmetic::{add, add_with_policy, AdditionResult, OverflowPolicy};
pub use config::Config;
pub use error::{AddNumbersError, ConfigError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for AddNumbers operations
pub type Result<T> = std::result::Result<T, AddNumbersError>;
