//! Exit code constants for the stencil CLI.
//!
//! Each failure family maps to one code:
//! - 0: Success
//! - 1: Usage error (bad parameters, unknown keywords, invalid user variables)
//! - 2: Configuration failure (malformed config, bad base directories)
//! - 3: Template resolution or generation failure
//! - 4: I/O failure (stdin read, output write)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Usage error: wrong parameter count, unknown keywords, invalid user variables.
pub const USAGE_ERROR: i32 = 1;

/// Configuration failure: malformed config file, absolute base dirs, missing base directory.
pub const CONFIG_FAILURE: i32 = 2;

/// Template failure: no template found at any attempted path, or generation failed.
pub const TEMPLATE_FAILURE: i32 = 3;

/// I/O failure: stdin could not be read or the output sink rejected the write.
pub const IO_FAILURE: i32 = 4;
