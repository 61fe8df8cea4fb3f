//! Input acquisition for the pipeline.
//!
//! Decides whether a request reads standard input and performs the read.
//! `--from -` forces a read, `--skip-stdin` suppresses the default, and a
//! real `--from` file supplies its name to variable processing instead of
//! stream content. The source stream is passed in by the caller so the
//! pipeline can be exercised without touching the process's real stdin.

use crate::cli::CliOptions;
use crate::error::{Result, StencilError};
use std::io::Read;

/// Whether this request should read standard input.
pub fn wants_stdin(options: &CliOptions) -> bool {
    if options.from_file == "-" {
        return true;
    }
    if options.skip_stdin {
        return false;
    }
    options.from_file.is_empty()
}

/// Acquire input text for the request from the given source stream.
///
/// Returns an empty string when the request does not read stdin. A failed
/// read maps to [`StencilError::StdinReadError`].
pub fn acquire(options: &CliOptions, source: &mut dyn Read) -> Result<String> {
    if !wants_stdin(options) {
        return Ok(String::new());
    }

    let mut buffer = String::new();
    source
        .read_to_string(&mut buffer)
        .map_err(|e| StencilError::StdinReadError(e.to_string()))?;
    Ok(buffer)
}
