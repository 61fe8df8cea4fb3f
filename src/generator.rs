//! Prompt generation: resolve a template path, load the file, render it.
//!
//! Keyword validation and path resolution keep their own error tags so the
//! caller can distinguish "no such template" from "template broken". Only
//! load and render failures collapse into
//! [`StencilError::PromptGenerationError`].

use crate::cli::CliOptions;
use crate::config::AppConfig;
use crate::error::{Result, StencilError};
use crate::resolver::PathResolver;
use crate::template;
use log::debug;
use std::collections::BTreeMap;

/// Generate the rendered prompt text for one request.
pub fn generate_prompt(
    config: &AppConfig,
    directive_raw: &str,
    layer_raw: &str,
    options: &CliOptions,
    variables: &BTreeMap<String, String>,
) -> Result<String> {
    let resolver = PathResolver::create(config, directive_raw, layer_raw, options)?;
    let path = resolver.resolve()?;
    debug!(
        "rendering template {} ({:?})",
        path.value().display(),
        path.status()
    );

    let raw = std::fs::read_to_string(path.value()).map_err(|e| {
        StencilError::PromptGenerationError(format!(
            "failed to read template '{}': {}",
            path.value().display(),
            e
        ))
    })?;

    let rendered = template::render_template(&raw, variables).map_err(|e| {
        StencilError::PromptGenerationError(format!(
            "failed to render template '{}': {}",
            path.value().display(),
            e
        ))
    })?;

    if options.use_schema {
        // A schema request must emit valid JSON after substitution
        serde_json::from_str::<serde_json::Value>(&rendered).map_err(|e| {
            StencilError::PromptGenerationError(format!(
                "schema template '{}' did not render to valid JSON: {}",
                path.value().display(),
                e
            ))
        })?;
    }

    Ok(rendered)
}
