//! Error types for the stencil CLI.
//!
//! Every failure in the pipeline is a value of [`StencilError`], never a
//! panic. The set is closed: each stage of the pipeline populates exactly one
//! variant, and each variant maps to a specific exit code.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for stencil operations.
///
/// Variants mirror the pipeline stages: parameter validation, configuration
/// normalization, template path resolution, and the collaborator boundaries
/// (stdin, variable processing, generation, output).
#[derive(Error, Debug)]
pub enum StencilError {
    /// Fewer than the required number of positional parameters were supplied.
    #[error("expected {expected} parameters (directive and layer), received {received}")]
    InvalidParameterCount { received: usize, expected: usize },

    /// Directive keyword is outside the configured allow-list or pattern.
    #[error("invalid directive type '{value}' (allowed: {allowed})")]
    InvalidDirectiveType { value: String, allowed: String },

    /// Layer keyword is outside the configured allow-list or pattern.
    #[error("invalid layer type '{value}' (allowed: {allowed})")]
    InvalidLayerType { value: String, allowed: String },

    /// Configuration is malformed or could not be interpreted.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A base-directory configuration value was absolute.
    ///
    /// Base directories are always resolved against the working directory;
    /// an absolute value in raw configuration is rejected even if it would
    /// have pointed at a valid location.
    #[error("configured {key} must be a relative path, got absolute '{value}'")]
    AbsolutePathNotAllowed { key: String, value: String },

    /// Directive or layer was missing or empty after extraction.
    #[error(
        "directive and layer must both be non-empty (directive: '{directive}', layer: '{layer}')"
    )]
    InvalidParameterCombination { directive: String, layer: String },

    /// The configured base directory does not exist on disk.
    #[error("base directory '{}' does not exist", .path.display())]
    BaseDirectoryNotFound { path: PathBuf },

    /// No template file exists at any attempted path, fallback included.
    #[error("{}", format_template_not_found(.attempted, .hint))]
    TemplateNotFound {
        /// Every candidate path that was checked, in resolution order.
        attempted: Vec<PathBuf>,
        /// Remediation hint, present when an adaptation fallback was tried
        /// or a directory level was missing.
        hint: Option<String>,
    },

    /// Standard input could not be read.
    #[error("failed to read standard input: {0}")]
    StdinReadError(String),

    /// One or more user variables failed validation.
    #[error("variable processing failed:\n{}", .errors.join("\n"))]
    VariableProcessingError { errors: Vec<String> },

    /// Template loading or rendering failed after a path was resolved.
    #[error("prompt generation failed: {0}")]
    PromptGenerationError(String),

    /// The output sink rejected the write.
    #[error("failed to write output: {0}")]
    OutputWriteError(String),
}

impl StencilError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            StencilError::InvalidParameterCount { .. }
            | StencilError::InvalidDirectiveType { .. }
            | StencilError::InvalidLayerType { .. }
            | StencilError::InvalidParameterCombination { .. }
            | StencilError::VariableProcessingError { .. } => exit_codes::USAGE_ERROR,

            StencilError::InvalidConfiguration(_)
            | StencilError::AbsolutePathNotAllowed { .. }
            | StencilError::BaseDirectoryNotFound { .. } => exit_codes::CONFIG_FAILURE,

            StencilError::TemplateNotFound { .. } | StencilError::PromptGenerationError(_) => {
                exit_codes::TEMPLATE_FAILURE
            }

            StencilError::StdinReadError(_) | StencilError::OutputWriteError(_) => {
                exit_codes::IO_FAILURE
            }
        }
    }
}

/// Result type alias for stencil operations.
pub type Result<T> = std::result::Result<T, StencilError>;

/// Render the multi-line message for [`StencilError::TemplateNotFound`].
fn format_template_not_found(attempted: &[PathBuf], hint: &Option<String>) -> String {
    let mut msg = String::from("no matching template found");
    if !attempted.is_empty() {
        msg.push_str("\nattempted paths:");
        for path in attempted {
            msg.push_str(&format!("\n  - {}", path.display()));
        }
    }
    if let Some(hint) = hint {
        msg.push_str(&format!("\nhint: {}", hint));
    }
    msg
}
