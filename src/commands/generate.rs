//! The generate command: load config, run the pipeline, place the output.

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::error::{Result, StencilError};
use crate::orchestrator::Orchestrator;
use log::debug;
use std::fs::File;
use std::io::{self, BufWriter};

/// Run one generate request end to end.
///
/// Config comes from `--config` (defaults applied when the file is absent),
/// stdin feeds input acquisition, and the rendered text lands on stdout or
/// in the `--destination` file.
pub fn cmd_generate(cli: Cli) -> Result<()> {
    let config = AppConfig::load_or_default(&cli.config)?;
    debug!("using config '{}'", cli.config.display());

    let options = cli.to_options();
    let orchestrator = Orchestrator::new(config);
    let mut stdin = io::stdin().lock();

    match &options.destination {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StencilError::OutputWriteError(format!(
                        "failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
            let file = File::create(path).map_err(|e| {
                StencilError::OutputWriteError(format!(
                    "failed to create '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            let mut sink = BufWriter::new(file);
            orchestrator.run(&cli.params, &options, &mut stdin, &mut sink)
        }
        None => {
            let mut sink = io::stdout().lock();
            orchestrator.run(&cli.params, &options, &mut stdin, &mut sink)
        }
    }
}
