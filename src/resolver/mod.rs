//! Template path resolution.
//!
//! Given raw configuration and a directive/layer pair, the resolver computes
//! the single most specific existing template file for the request:
//!
//! 1. pick the base directory (prompt or schema mode)
//! 2. descend into `{base}/{directive}/{layer}`
//! 3. determine the from-layer (explicit flag, file-name inference, default)
//! 4. try `f_{from}_{adaptation}.md`, then fall back to `f_{from}.md`
//!
//! Every candidate that was checked is recorded, so a failed resolution can
//! report the full attempted-path trail.

mod template_path;


pub use template_path::{PathMetadata, PathStatus, TemplatePath};

use crate::cli::CliOptions;
use crate::config::AppConfig;
use crate::error::{Result, StencilError};
use crate::keyword::{DirectiveType, LayerType};
use log::debug;
use std::path::{Path, PathBuf};

/// Absolute directories the resolver works against, derived once from raw
/// configuration.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    prompt_base_dir: PathBuf,
    schema_base_dir: PathBuf,
    working_dir: PathBuf,
}

impl ResolverConfig {
    /// Derive absolute resolver paths from raw configuration.
    ///
    /// Relative base dirs are resolved against the working dir. An absolute
    /// base dir in raw configuration is rejected outright, even when it
    /// would have pointed at a valid location: base directories are always
    /// expressed relative to the working dir, with no second convention.
    pub fn from_app(app: &AppConfig) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| {
            StencilError::InvalidConfiguration(format!(
                "cannot determine current directory: {}",
                e
            ))
        })?;

        let raw_working = Path::new(&app.working_dir);
        let working_dir = if raw_working.is_absolute() {
            raw_working.to_path_buf()
        } else {
            cwd.join(raw_working)
        };

        let prompt = relative_base("app_prompt.base_dir", &app.app_prompt.base_dir)?;
        let schema = relative_base("app_schema.base_dir", &app.app_schema.base_dir)?;

        Ok(Self {
            prompt_base_dir: working_dir.join(prompt),
            schema_base_dir: working_dir.join(schema),
            working_dir,
        })
    }

    /// The absolute working directory everything was resolved against.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }
}

/// Require a configured base dir to be relative.
fn relative_base(key: &str, raw: &str) -> Result<PathBuf> {
    let path = Path::new(raw);
    if path.is_absolute() {
        return Err(StencilError::AbsolutePathNotAllowed {
            key: key.to_string(),
            value: raw.to_string(),
        });
    }
    Ok(path.to_path_buf())
}

/// Deterministically computes the single most specific existing template
/// file for one request, or reports why none was found.
///
/// All inputs are owned by the resolver, so later mutation of caller state
/// cannot affect resolution. One resolver serves one request.
#[derive(Debug, Clone)]
pub struct PathResolver {
    config: ResolverConfig,
    directive: DirectiveType,
    layer: LayerType,
    use_schema: bool,
    adaptation: String,
    from_layer_type: String,
    from_file: String,
    default_from_layer: Option<String>,
}

impl PathResolver {
    /// Validate raw inputs and build a resolver for one request.
    ///
    /// Validation order: configuration is normalized first (absolute base
    /// dirs rejected there), then the raw pair must be non-empty after
    /// trimming, then each keyword must satisfy the configured rules.
    pub fn create(
        app: &AppConfig,
        directive_raw: &str,
        layer_raw: &str,
        options: &CliOptions,
    ) -> Result<Self> {
        let config = ResolverConfig::from_app(app)?;

        let directive_raw = directive_raw.trim();
        let layer_raw = layer_raw.trim();
        if directive_raw.is_empty() || layer_raw.is_empty() {
            return Err(StencilError::InvalidParameterCombination {
                directive: directive_raw.to_string(),
                layer: layer_raw.to_string(),
            });
        }

        let directive = DirectiveType::parse(directive_raw, &app.directive_rules()?)?;
        let layer = LayerType::parse(layer_raw, &app.layer_rules()?)?;

        Ok(Self {
            config,
            directive,
            layer,
            use_schema: options.use_schema,
            adaptation: options.adaptation.trim().to_string(),
            from_layer_type: options.from_layer_type.trim().to_string(),
            from_file: options.from_file.clone(),
            default_from_layer: app.default_from_layer_type.clone(),
        })
    }

    /// Resolve the template path for this request.
    pub fn resolve(&self) -> Result<TemplatePath> {
        let base = self.base_dir();
        if !dir_exists(base)? {
            return Err(StencilError::BaseDirectoryNotFound {
                path: base.to_path_buf(),
            });
        }

        let directive_dir = base.join(self.directive.as_str());
        if !dir_exists(&directive_dir)? {
            return Err(StencilError::TemplateNotFound {
                attempted: vec![directive_dir.clone()],
                hint: Some(format!(
                    "no '{}' directory under '{}'",
                    self.directive,
                    base.display()
                )),
            });
        }

        let layer_dir = directive_dir.join(self.layer.as_str());
        if !dir_exists(&layer_dir)? {
            return Err(StencilError::TemplateNotFound {
                attempted: vec![layer_dir.clone()],
                hint: Some(format!(
                    "no '{}' directory under '{}'",
                    self.layer,
                    directive_dir.display()
                )),
            });
        }

        let from_layer = self.resolve_from_layer();
        let mut attempted = Vec::new();

        let primary = layer_dir.join(self.build_file_name(&from_layer, true));
        attempted.push(primary.clone());
        if file_exists(&primary)? {
            debug!("resolved template {}", primary.display());
            return TemplatePath::new(
                primary,
                PathStatus::Found,
                self.path_metadata(base, &from_layer, attempted),
            );
        }

        if self.adaptation_requested() {
            let fallback = layer_dir.join(self.build_file_name(&from_layer, false));
            attempted.push(fallback.clone());
            if file_exists(&fallback)? {
                debug!(
                    "adaptation '{}' has no template, falling back to {}",
                    self.adaptation,
                    fallback.display()
                );
                return TemplatePath::new(
                    fallback,
                    PathStatus::Fallback,
                    self.path_metadata(base, &from_layer, attempted),
                );
            }
        }

        let hint = self.adaptation_requested().then(|| {
            format!(
                "adaptation '{}' has no template; remove --adaptation or add the adapted file",
                self.adaptation
            )
        });
        Err(StencilError::TemplateNotFound { attempted, hint })
    }

    /// Whether resolution would fall back for the given primary candidate.
    ///
    /// Pure predicate over current filesystem state, separable from
    /// [`PathResolver::resolve`]: true iff an adaptation was requested and
    /// the primary candidate is missing.
    pub fn should_fallback(&self, primary: &Path) -> Result<bool> {
        Ok(self.adaptation_requested() && !file_exists(primary)?)
    }

    /// The layer type describing the input side of the conversion.
    ///
    /// An explicit override wins; otherwise the from-file basename is
    /// matched against `{layer}_*`; otherwise the configured default applies,
    /// and finally the target layer itself. Inference failure is soft: it is
    /// logged and resolution continues with the default.
    pub fn resolve_from_layer(&self) -> String {
        if !self.from_layer_type.is_empty() {
            return self.from_layer_type.clone();
        }

        if !self.from_file.is_empty() && self.from_file != "-" {
            if let Some(inferred) = infer_from_layer(&self.from_file) {
                return inferred;
            }
            debug!(
                "cannot infer from-layer from '{}': basename does not match '<layer>_*'",
                self.from_file
            );
        }

        if let Some(default) = &self.default_from_layer {
            return default.clone();
        }
        self.layer.as_str().to_string()
    }

    /// Template file name for the given from-layer.
    ///
    /// Schema mode always resolves the plain JSON variant; the adaptation
    /// suffix only applies to prompt templates.
    pub fn build_file_name(&self, from_layer: &str, with_adaptation: bool) -> String {
        if self.use_schema {
            format!("f_{}.json", from_layer)
        } else if with_adaptation && !self.adaptation.is_empty() {
            format!("f_{}_{}.md", from_layer, self.adaptation)
        } else {
            format!("f_{}.md", from_layer)
        }
    }

    fn base_dir(&self) -> &Path {
        if self.use_schema {
            &self.config.schema_base_dir
        } else {
            &self.config.prompt_base_dir
        }
    }

    fn adaptation_requested(&self) -> bool {
        !self.use_schema && !self.adaptation.is_empty()
    }

    fn path_metadata(
        &self,
        base: &Path,
        from_layer: &str,
        attempted_paths: Vec<PathBuf>,
    ) -> PathMetadata {
        PathMetadata {
            base_dir: base.to_path_buf(),
            directive: self.directive.as_str().to_string(),
            layer: self.layer.as_str().to_string(),
            from_layer: from_layer.to_string(),
            adaptation: self
                .adaptation_requested()
                .then(|| self.adaptation.clone()),
            attempted_paths,
        }
    }
}

/// Infer the from-layer from a source file name following `{layer}_*`.
///
/// Returns `None` when the basename has fewer than two underscore-delimited
/// parts.
fn infer_from_layer(from_file: &str) -> Option<String> {
    let name = Path::new(from_file).file_name()?.to_str()?;
    let (first, rest) = name.split_once('_')?;
    if first.is_empty() || rest.is_empty() {
        return None;
    }
    Some(first.to_string())
}

/// Directory existence check that treats only NotFound as "missing".
///
/// Any other failure (e.g. permission) is reported as a configuration
/// problem instead of propagating as a fault.
fn dir_exists(path: &Path) -> Result<bool> {
    match std::fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(StencilError::InvalidConfiguration(format!(
            "cannot access '{}': {}",
            path.display(),
            e
        ))),
    }
}

/// File existence check with the same error policy as [`dir_exists`].
fn file_exists(path: &Path) -> Result<bool> {
    match std::fs::metadata(path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(StencilError::InvalidConfiguration(format!(
            "cannot access '{}': {}",
            path.display(),
            e
        ))),
    }
}
