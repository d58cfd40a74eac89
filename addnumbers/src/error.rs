//! Unified error handling for the AddNumbers library
//!
//! Every fallible operation in the crate returns [`AddNumbersError`] so callers
//! can match on the failure kind instead of parsing messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the AddNumbers library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AddNumbersError {
    /// The sum does not fit in a 64-bit signed integer
    #[error("Arithmetic overflow: {number1} + {number2} does not fit in a 64-bit signed integer")]
    ArithmeticOverflow {
        /// Left operand
        number1: i64,
        /// Right operand
        number2: i64,
    },

    /// Caller supplied arguments that could not be bound to the operation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl AddNumbersError {
    /// Whether the error was caused by the caller rather than the environment
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AddNumbersError::ArithmeticOverflow { .. } | AddNumbersError::InvalidInput(_)
        )
    }
}

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file from disk
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        /// Path to the configuration file that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse YAML content from a configuration file
    #[error("Invalid YAML syntax in {path}:\n{source}\n\nHint: Check for proper indentation and YAML formatting")]
    YamlParse {
        /// Path to the configuration file with invalid YAML content
        path: PathBuf,
        /// Underlying YAML parsing error
        #[source]
        source: serde_yaml::Error,
    },

    /// Invalid configuration value for a specific field
    #[error("Invalid configuration value for '{field}': {value}\n{hint}")]
    InvalidValue {
        /// Name of the configuration field
        field: String,
        /// The rejected value
        value: String,
        /// How to fix the value
        hint: String,
    },
}
