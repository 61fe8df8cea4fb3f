//! Config loading, validation, and keyword-rule derivation.

use super::model::AppConfig;
use crate::error::{Result, StencilError};
use crate::keyword::{KeywordKind, KeywordRules};
use regex::Regex;
use std::path::Path;

impl AppConfig {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            StencilError::InvalidConfiguration(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from a YAML file, falling back to defaults when the file
    /// does not exist. A file that exists but fails to parse is still an
    /// error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: AppConfig = serde_yaml::from_str(yaml).map_err(|e| {
            StencilError::InvalidConfiguration(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return an error on invalid values.
    ///
    /// Validation rules:
    /// - base dirs must be non-empty
    /// - keyword lists must have no empty entries
    /// - keyword patterns must compile
    ///
    /// Whether base dirs are relative is deliberately not checked here:
    /// that rule is enforced at the single point where raw configuration is
    /// turned into resolver paths.
    pub fn validate(&self) -> Result<()> {
        if self.app_prompt.base_dir.trim().is_empty() {
            return Err(StencilError::InvalidConfiguration(
                "app_prompt.base_dir must be non-empty".to_string(),
            ));
        }
        if self.app_schema.base_dir.trim().is_empty() {
            return Err(StencilError::InvalidConfiguration(
                "app_schema.base_dir must be non-empty".to_string(),
            ));
        }

        for (field, list) in [
            ("directive_types", &self.directive_types),
            ("layer_types", &self.layer_types),
        ] {
            if list.iter().any(|entry| entry.trim().is_empty()) {
                return Err(StencilError::InvalidConfiguration(format!(
                    "{} entries must be non-empty",
                    field
                )));
            }
        }

        // Surface pattern compile errors at load time rather than first use.
        self.directive_rules()?;
        self.layer_rules()?;

        Ok(())
    }

    /// Keyword rules for the directive category.
    pub fn directive_rules(&self) -> Result<KeywordRules> {
        Ok(KeywordRules::new(
            KeywordKind::Directive,
            self.directive_types.clone(),
            compile_pattern("directive_pattern", self.directive_pattern.as_deref())?,
        ))
    }

    /// Keyword rules for the layer category.
    pub fn layer_rules(&self) -> Result<KeywordRules> {
        Ok(KeywordRules::new(
            KeywordKind::Layer,
            self.layer_types.clone(),
            compile_pattern("layer_pattern", self.layer_pattern.as_deref())?,
        ))
    }
}

/// Compile a configured keyword pattern, anchored to match whole keywords.
fn compile_pattern(field: &str, raw: Option<&str>) -> Result<Option<Regex>> {
    match raw {
        None => Ok(None),
        Some(raw) => {
            let anchored = format!("^(?:{})$", raw);
            let regex = Regex::new(&anchored).map_err(|e| {
                StencilError::InvalidConfiguration(format!(
                    "{} is not a valid regex: {}",
                    field, e
                ))
            })?;
            Ok(Some(regex))
        }
    }
}
