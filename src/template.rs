//! Template rendering for prompt files.
//!
//! This module performs `{variable}` substitution in template text. A
//! placeholder is a brace pair whose content is a bare variable name: a
//! letter followed by letters, digits, `_` or `-`, with no surrounding
//! whitespace. Any other brace sequence is left verbatim, so code fragments
//! and JSON bodies inside templates survive rendering untouched.
//!
//! The engine is fail-safe in one direction: a placeholder that names a
//! variable not present in the map is an error rather than a silent empty
//! substitution. This catches typos in template authoring early.

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z][A-Za-z0-9_-]*)\}").expect("Invalid placeholder regex"));

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder referenced a variable that was not provided.
    UndefinedVariable {
        /// The name of the undefined variable.
        name: String,
        /// Byte offset of the placeholder in the template.
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedVariable { name, position } => {
                write!(
                    f,
                    "undefined variable '{}' at position {} in template",
                    name, position
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Render a template by substituting `{variable}` placeholders.
///
/// Returns the rendered string, or [`TemplateError::UndefinedVariable`] when
/// a placeholder names a variable absent from `variables`. Substituted values
/// are inserted literally and never re-scanned for placeholders.
pub fn render_template(
    template: &str,
    variables: &BTreeMap<String, String>,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_str(&template[last..whole.start()]);
        match variables.get(name.as_str()) {
            Some(value) => out.push_str(value),
            None => {
                return Err(TemplateError::UndefinedVariable {
                    name: name.as_str().to_string(),
                    position: whole.start(),
                });
            }
        }
        last = whole.end();
    }

    out.push_str(&template[last..]);
    Ok(out)
}
