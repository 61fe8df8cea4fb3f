//! CLI argument parsing for stencil.
//!
//! Uses clap derive macros for declarative argument definitions. A request is
//! a two-word command: an action keyword (the directive) followed by a target
//! granularity keyword (the layer), e.g. `stencil to project`. Parameter
//! count is validated by the orchestrator, not here, so that the failure is
//! reported through the same typed-error channel as everything else.

use clap::Parser;
use std::path::PathBuf;

/// Stencil: template-driven prompt generator for agentic coding pipelines.
///
/// Resolves a prompt (or schema) template from the directive/layer pair,
/// substitutes runtime variables into it, and writes the rendered text to
/// stdout or a destination file.
#[derive(Parser, Debug)]
#[command(name = "stencil")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Positional parameters: directive keyword, then layer keyword.
    ///
    /// Extra parameters beyond the first two are accepted and ignored.
    pub params: Vec<String>,

    /// Source file feeding this request; `-` reads standard input.
    ///
    /// A real file name also drives from-layer inference: `task_data.md`
    /// selects the `f_task*` template variant.
    #[arg(short = 'f', long = "from", value_name = "FILE")]
    pub from: Option<String>,

    /// Layer type of the input side, overriding filename inference.
    #[arg(short = 'i', long = "input", value_name = "LAYER")]
    pub input: Option<String>,

    /// Named template variant to prefer; falls back to the plain template.
    #[arg(short = 'a', long = "adaptation", value_name = "NAME")]
    pub adaptation: Option<String>,

    /// Write rendered output to this file instead of stdout.
    #[arg(short = 'o', long = "destination", value_name = "FILE")]
    pub destination: Option<PathBuf>,

    /// Resolve a schema template (f_*.json) instead of a prompt template.
    #[arg(long)]
    pub use_schema: bool,

    /// Do not read standard input even when no --from is given.
    #[arg(long)]
    pub skip_stdin: bool,

    /// User variable forwarded to the template as {uv-NAME}; repeatable.
    #[arg(long = "uv", value_name = "NAME=VALUE", value_parser = parse_user_var)]
    pub user_vars: Vec<(String, String)>,

    /// Path to the config file.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        default_value = ".stencil/config.yaml"
    )]
    pub config: PathBuf,
}

/// Per-request options consumed by the pipeline.
///
/// This is the canonical internal record: every optional CLI flag is
/// defaulted here once, so downstream stages never branch on absence.
#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    /// Resolve against the schema base directory instead of prompts.
    pub use_schema: bool,
    /// Adaptation suffix; empty when no variant was requested.
    pub adaptation: String,
    /// Explicit from-layer override; empty when not given.
    pub from_layer_type: String,
    /// The `--from` value; empty when not given, `-` for stdin.
    pub from_file: String,
    /// Suppress the default stdin read.
    pub skip_stdin: bool,
    /// Output file; stdout when `None`.
    pub destination: Option<PathBuf>,
    /// User variables as (name, value) pairs, in argument order.
    pub user_vars: Vec<(String, String)>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Derive the per-request options bag from the parsed surface.
    pub fn to_options(&self) -> CliOptions {
        CliOptions {
            use_schema: self.use_schema,
            adaptation: self.adaptation.clone().unwrap_or_default(),
            from_layer_type: self.input.clone().unwrap_or_default(),
            from_file: self.from.clone().unwrap_or_default(),
            skip_stdin: self.skip_stdin,
            destination: self.destination.clone(),
            user_vars: self.user_vars.clone(),
        }
    }
}

/// Parse a `NAME=VALUE` user-variable argument.
fn parse_user_var(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}
