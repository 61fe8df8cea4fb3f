//! Immutable value object for a resolved template path.

use crate::error::{Result, StencilError};
use std::path::{Path, PathBuf};

/// How the resolved template file was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStatus {
    /// The most specific candidate existed.
    Found,
    /// The adaptation-specific candidate was missing; the plain variant was
    /// used instead.
    Fallback,
}

/// Everything the resolver knew when it produced the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMetadata {
    /// Base directory the search ran under.
    pub base_dir: PathBuf,
    /// Directive keyword of the request.
    pub directive: String,
    /// Layer keyword of the request.
    pub layer: String,
    /// From-layer the file name was built from.
    pub from_layer: String,
    /// Adaptation suffix, when one was requested.
    pub adaptation: Option<String>,
    /// Every candidate path that was checked, in resolution order.
    pub attempted_paths: Vec<PathBuf>,
}

/// A fully-resolved template file path.
///
/// Produced exactly once per resolution attempt and never mutated. The inner
/// value is guaranteed non-empty and absolute: the smart constructor is the
/// only way in, and the fields are private.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePath {
    value: PathBuf,
    status: PathStatus,
    metadata: PathMetadata,
}

impl TemplatePath {
    /// Construct a resolved template path.
    ///
    /// Fails when `value` is empty or relative; both would mean the resolver
    /// produced a path that later stages cannot trust.
    pub fn new(value: PathBuf, status: PathStatus, metadata: PathMetadata) -> Result<Self> {
        if value.as_os_str().is_empty() {
            return Err(StencilError::InvalidConfiguration(
                "resolved template path must be non-empty".to_string(),
            ));
        }
        if !value.is_absolute() {
            return Err(StencilError::InvalidConfiguration(format!(
                "resolved template path must be absolute, got '{}'",
                value.display()
            )));
        }
        Ok(Self {
            value,
            status,
            metadata,
        })
    }

    /// The absolute path of the template file.
    pub fn value(&self) -> &Path {
        &self.value
    }

    /// How the file was found.
    pub fn status(&self) -> PathStatus {
        self.status
    }

    /// Resolution metadata, including the attempted-path trail.
    pub fn metadata(&self) -> &PathMetadata {
        &self.metadata
    }

    /// True when the plain variant stood in for a missing adaptation.
    pub fn is_fallback(&self) -> bool {
        self.status == PathStatus::Fallback
    }
}
