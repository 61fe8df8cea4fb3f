//! Shared test fixtures.
//!
//! Compiled only for tests; provides a template workspace on disk plus
//! deliberately-failing I/O endpoints for asserting that pipeline stages do
//! (or do not) touch their streams.

use crate::config::AppConfig;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::TempDir;

/// A temp workspace whose path is the config working dir.
///
/// Returns the owning `TempDir` (keep it alive for the test's duration) and
/// an `AppConfig` pointing at it with default base dirs.
pub(crate) fn template_workspace() -> (TempDir, AppConfig) {
    let dir = TempDir::new().unwrap();
    let config = AppConfig {
        working_dir: dir.path().to_string_lossy().into_owned(),
        ..AppConfig::default()
    };
    (dir, config)
}

/// Write a template file under the workspace, creating parent directories.
pub(crate) fn write_template(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// A reader that fails every read.
pub(crate) struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("simulated stdin failure"))
    }
}

/// A writer that fails every write.
pub(crate) struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("simulated sink failure"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Err(std::io::Error::other("simulated sink failure"))
    }
}
