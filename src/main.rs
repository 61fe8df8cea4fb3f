//! Stencil: template-driven prompt generator for agentic coding pipelines.
//!
//! This is the main entry point for the `stencil` CLI. It parses arguments,
//! runs the request through the pipeline, and handles errors with proper
//! exit codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod generator;
pub mod input;
pub mod keyword;
pub mod orchestrator;
pub mod resolver;
pub mod template;
pub mod vars;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
