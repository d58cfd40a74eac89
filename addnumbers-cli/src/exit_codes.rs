//! Exit code constants for CLI commands
//!
//! - 0: Success
//! - 1: General error
//! - 2: Arithmetic or validation failure

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// General error, e.g. the server failed to start
pub const EXIT_WARNING: i32 = 1;

/// The requested addition could not be performed
pub const EXIT_ERROR: i32 = 2;
