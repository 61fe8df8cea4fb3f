//! AppConfig struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for the stencil CLI.
///
/// This struct represents the contents of `.stencil/config.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    // =========================================================================
    // Template locations
    // =========================================================================
    /// Prompt template settings.
    pub app_prompt: PromptConfig,

    /// Schema template settings.
    pub app_schema: SchemaConfig,

    /// Directory that relative base dirs are resolved against.
    /// Itself resolved against the process working directory when relative.
    #[serde(default = "default_working_dir")]
    pub working_dir: String,

    // =========================================================================
    // Keyword rules
    // =========================================================================
    /// Directive keywords accepted as the first positional parameter.
    #[serde(default = "default_directive_types")]
    pub directive_types: Vec<String>,

    /// Layer keywords accepted as the second positional parameter.
    #[serde(default = "default_layer_types")]
    pub layer_types: Vec<String>,

    /// Regex accepted for directives instead of `directive_types` when set.
    /// The pattern is anchored before use, so it must match the whole keyword.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directive_pattern: Option<String>,

    /// Regex accepted for layers instead of `layer_types` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_pattern: Option<String>,

    // =========================================================================
    // Resolution defaults
    // =========================================================================
    /// From-layer used when neither `--input` nor filename inference applies.
    /// When unset, the target layer itself is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_from_layer_type: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_prompt: PromptConfig::default(),
            app_schema: SchemaConfig::default(),
            working_dir: default_working_dir(),
            directive_types: default_directive_types(),
            layer_types: default_layer_types(),
            directive_pattern: None,
            layer_pattern: None,
            default_from_layer_type: None,
        }
    }
}
