//! Variable processing for template rendering.
//!
//! Turns the per-request options and acquired input into the flat map that
//! the template engine substitutes from. Reserved variables are always
//! present (possibly empty) so templates can reference them unconditionally;
//! user variables arrive as repeated `--uv name=value` flags and are stored
//! under their `uv-` prefixed names.
//!
//! Validation collects every failure instead of stopping at the first, so a
//! request with three bad variables reports all three. Each entry renders as
//! `"{kind}: {detail}"`.

use crate::cli::CliOptions;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

/// Variable names reserved for the pipeline; user variables may not shadow
/// them.
pub const RESERVED_VARIABLES: &[&str] = &["input_text", "input_text_file", "destination_path"];

static USER_VAR_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("Invalid variable name regex"));

/// Build the substitution map from request options and acquired input text.
///
/// On failure returns the full list of validation errors, one entry per
/// offending variable.
pub fn process_variables(
    options: &CliOptions,
    input_text: &str,
) -> Result<BTreeMap<String, String>, Vec<String>> {
    let mut errors = Vec::new();
    let mut vars = BTreeMap::new();

    vars.insert("input_text".to_string(), input_text.to_string());
    vars.insert(
        "input_text_file".to_string(),
        input_file_name(&options.from_file),
    );
    vars.insert(
        "destination_path".to_string(),
        options
            .destination
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
    );

    for (name, value) in &options.user_vars {
        if !USER_VAR_NAME.is_match(name) {
            errors.push(format!(
                "invalid-name: '{}' is not a valid variable name",
                name
            ));
            continue;
        }
        if RESERVED_VARIABLES.contains(&name.as_str())
            || RESERVED_VARIABLES
                .iter()
                .any(|reserved| name == &format!("uv-{}", reserved))
        {
            errors.push(format!(
                "reserved-name: '{}' collides with a pipeline variable",
                name
            ));
            continue;
        }
        if value.is_empty() {
            errors.push(format!("empty-value: variable '{}' has no value", name));
            continue;
        }
        if vars
            .insert(format!("uv-{}", name), value.clone())
            .is_some()
        {
            errors.push(format!(
                "duplicate-name: variable '{}' was supplied more than once",
                name
            ));
        }
    }

    if errors.is_empty() { Ok(vars) } else { Err(errors) }
}

/// Basename of the `--from` file for the `input_text_file` variable.
///
/// Empty when no file was given or when `-` (stdin) was requested.
fn input_file_name(from_file: &str) -> String {
    if from_file.is_empty() || from_file == "-" {
        return String::new();
    }
    Path::new(from_file)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn options_with_vars(user_vars: Vec<(&str, &str)>) -> CliOptions {
        CliOptions {
            user_vars: user_vars
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..CliOptions::default()
        }
    }

    #[test]
    fn reserved_variables_are_always_present() {
        let vars = process_variables(&CliOptions::default(), "").unwrap();
        assert_eq!(vars.get("input_text"), Some(&String::new()));
        assert_eq!(vars.get("input_text_file"), Some(&String::new()));
        assert_eq!(vars.get("destination_path"), Some(&String::new()));
    }

    #[test]
    fn input_text_carries_acquired_content() {
        let vars = process_variables(&CliOptions::default(), "piped notes\n").unwrap();
        assert_eq!(vars.get("input_text"), Some(&"piped notes\n".to_string()));
    }

    #[test]
    fn input_text_file_is_the_from_basename() {
        let options = CliOptions {
            from_file: "docs/drafts/task_data.md".to_string(),
            ..CliOptions::default()
        };
        let vars = process_variables(&options, "").unwrap();
        assert_eq!(
            vars.get("input_text_file"),
            Some(&"task_data.md".to_string())
        );
    }

    #[test]
    fn stdin_marker_leaves_input_text_file_empty() {
        let options = CliOptions {
            from_file: "-".to_string(),
            ..CliOptions::default()
        };
        let vars = process_variables(&options, "from stdin").unwrap();
        assert_eq!(vars.get("input_text_file"), Some(&String::new()));
    }

    #[test]
    fn destination_path_reflects_the_flag() {
        let options = CliOptions {
            destination: Some(PathBuf::from("out/report.md")),
            ..CliOptions::default()
        };
        let vars = process_variables(&options, "").unwrap();
        assert_eq!(
            vars.get("destination_path"),
            Some(&"out/report.md".to_string())
        );
    }

    #[test]
    fn user_vars_are_stored_with_uv_prefix() {
        let options = options_with_vars(vec![("branch", "main"), ("owner", "alice")]);
        let vars = process_variables(&options, "").unwrap();
        assert_eq!(vars.get("uv-branch"), Some(&"main".to_string()));
        assert_eq!(vars.get("uv-owner"), Some(&"alice".to_string()));
    }

    #[test]
    fn all_violations_are_collected() {
        let options = options_with_vars(vec![
            ("bad name", "x"),
            ("input_text", "x"),
            ("empty", ""),
        ]);
        let errors = process_variables(&options, "").unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].starts_with("invalid-name: "));
        assert!(errors[1].starts_with("reserved-name: "));
        assert!(errors[2].starts_with("empty-value: "));
    }

    #[test]
    fn duplicate_user_vars_are_rejected() {
        let options = options_with_vars(vec![("branch", "main"), ("branch", "dev")]);
        let errors = process_variables(&options, "").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("duplicate-name: "));
    }

    #[test]
    fn uv_prefixed_reserved_names_are_rejected() {
        let options = options_with_vars(vec![("uv-input_text", "x")]);
        let errors = process_variables(&options, "").unwrap_err();
        assert!(errors[0].starts_with("reserved-name: "));
    }

    #[test]
    fn names_must_start_with_a_letter() {
        let options = options_with_vars(vec![("1branch", "x")]);
        assert!(process_variables(&options, "").is_err());

        let options = options_with_vars(vec![("b1_ra-nch", "x")]);
        assert!(process_variables(&options, "").is_ok());
    }
}
