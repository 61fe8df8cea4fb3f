//! Validated keyword types for the two-word command surface.
//!
//! A request names an action keyword (the directive, e.g. "to") and a target
//! granularity keyword (the layer, e.g. "project"). Both are wrapped in
//! value types that can only be constructed through [`DirectiveType::parse`]
//! and [`LayerType::parse`], so no unvalidated string reaches path
//! resolution. Values are trimmed once at construction and compared
//! case-sensitively afterwards.

use crate::error::{Result, StencilError};
use regex::Regex;
use std::fmt;

/// Which keyword category a rule set validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
    Directive,
    Layer,
}

/// Validation rules for one keyword category.
///
/// When a regex pattern is configured it takes precedence over the
/// allow-list; otherwise the keyword must appear in the list. Patterns are
/// anchored by the configuration layer, so `is_match` means a full match.
#[derive(Debug, Clone)]
pub struct KeywordRules {
    kind: KeywordKind,
    allowed: Vec<String>,
    pattern: Option<Regex>,
}

impl KeywordRules {
    /// Build a rule set for one keyword category.
    pub fn new(kind: KeywordKind, allowed: Vec<String>, pattern: Option<Regex>) -> Self {
        Self {
            kind,
            allowed,
            pattern,
        }
    }

    /// Whether a trimmed keyword satisfies these rules.
    pub fn permits(&self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        match &self.pattern {
            Some(pattern) => pattern.is_match(value),
            None => self.allowed.iter().any(|a| a == value),
        }
    }

    /// Human-readable description of what these rules accept.
    pub fn describe(&self) -> String {
        match &self.pattern {
            Some(pattern) => format!("pattern {}", pattern.as_str()),
            None => self.allowed.join(", "),
        }
    }

    fn rejection(&self, value: &str) -> StencilError {
        match self.kind {
            KeywordKind::Directive => StencilError::InvalidDirectiveType {
                value: value.to_string(),
                allowed: self.describe(),
            },
            KeywordKind::Layer => StencilError::InvalidLayerType {
                value: value.to_string(),
                allowed: self.describe(),
            },
        }
    }
}

/// The action keyword of a two-word command (e.g. "to", "summary").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveType(String);

impl DirectiveType {
    /// Parse and validate a raw directive keyword.
    pub fn parse(raw: &str, rules: &KeywordRules) -> Result<Self> {
        let value = raw.trim();
        if !rules.permits(value) {
            return Err(rules.rejection(value));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DirectiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The target granularity keyword of a two-word command (e.g. "project").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerType(String);

impl LayerType {
    /// Parse and validate a raw layer keyword.
    pub fn parse(raw: &str, rules: &KeywordRules) -> Result<Self> {
        let value = raw.trim();
        if !rules.permits(value) {
            return Err(rules.rejection(value));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
