//! Command implementations for stencil.
//!
//! This module routes the parsed CLI into the pipeline. The two-word
//! generate request is the entire command surface; flags selecting config
//! and output placement are handled inside the command.

mod generate;

use crate::cli::Cli;
use crate::error::Result;

/// Dispatch the parsed CLI to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    generate::cmd_generate(cli)
}
