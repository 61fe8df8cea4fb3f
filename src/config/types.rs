//! Configuration section types and defaults for stencil.
//!
//! This module defines the nested config sections, constants, and default
//! value functions used by the AppConfig struct.

use serde::{Deserialize, Serialize};

/// Prompt template settings (`app_prompt` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Base directory for prompt templates, relative to the working dir.
    #[serde(default = "default_prompt_base_dir")]
    pub base_dir: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            base_dir: default_prompt_base_dir(),
        }
    }
}

/// Schema template settings (`app_schema` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Base directory for schema templates, relative to the working dir.
    #[serde(default = "default_schema_base_dir")]
    pub base_dir: String,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            base_dir: default_schema_base_dir(),
        }
    }
}

// Default value functions for serde
pub(crate) fn default_prompt_base_dir() -> String {
    "prompts".to_string()
}
pub(crate) fn default_schema_base_dir() -> String {
    "schema".to_string()
}
pub(crate) fn default_working_dir() -> String {
    ".".to_string()
}

/// Default directive keywords accepted on the command line.
pub fn default_directive_types() -> Vec<String> {
    vec![
        "to".to_string(),
        "summary".to_string(),
        "defect".to_string(),
        "find".to_string(),
    ]
}

/// Default layer keywords accepted on the command line.
pub fn default_layer_types() -> Vec<String> {
    vec![
        "project".to_string(),
        "issue".to_string(),
        "task".to_string(),
        "bugs".to_string(),
    ]
}
