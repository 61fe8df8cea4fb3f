//! Configuration model for stencil.
//!
//! This module defines the AppConfig struct that represents
//! `.stencil/config.yaml`. It supports forward-compatible YAML parsing
//! (unknown fields are ignored), sensible defaults for optional fields, and
//! validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::AppConfig;
pub use types::{PromptConfig, SchemaConfig};
