//! Request orchestration: the fixed six-step pipeline.
//!
//! One request flows parameter-count validation → extraction → input
//! acquisition → variable processing → prompt generation → output write.
//! Each step only runs when the previous one succeeded, and every
//! collaborator failure is translated into one [`StencilError`] variant.

use crate::cli::CliOptions;
use crate::config::AppConfig;
use crate::error::{Result, StencilError};
use crate::{generator, input, vars};
use std::io::{Read, Write};

/// Number of positional parameters a request requires.
pub const EXPECTED_PARAMS: usize = 2;

/// Sequences requests through the pipeline.
///
/// The orchestrator holds only the immutable configuration: every call
/// derives its state from the arguments, so repeated or interleaved calls on
/// one value cannot interfere.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    config: AppConfig,
}

impl Orchestrator {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Run one request through the pipeline.
    ///
    /// `source` is the stdin stream, `sink` the output stream; both are
    /// injected so the pipeline can be exercised hermetically.
    pub fn run(
        &self,
        params: &[String],
        options: &CliOptions,
        source: &mut dyn Read,
        sink: &mut dyn Write,
    ) -> Result<()> {
        // 1. Parameter count; extras beyond the pair are accepted and ignored
        if params.len() < EXPECTED_PARAMS {
            return Err(StencilError::InvalidParameterCount {
                received: params.len(),
                expected: EXPECTED_PARAMS,
            });
        }

        // 2. Extraction; semantic keyword validation happens inside
        //    prompt generation
        let directive_raw = &params[0];
        let layer_raw = &params[1];

        // 3. Input acquisition
        let input_text = input::acquire(options, source)?;

        // 4. Variable processing
        let variables = vars::process_variables(options, &input_text)
            .map_err(|errors| StencilError::VariableProcessingError { errors })?;

        // 5. Prompt generation
        let rendered = generator::generate_prompt(
            &self.config,
            directive_raw,
            layer_raw,
            options,
            &variables,
        )?;

        // 6. Output
        sink.write_all(rendered.as_bytes())
            .map_err(|e| StencilError::OutputWriteError(e.to_string()))?;
        sink.flush()
            .map_err(|e| StencilError::OutputWriteError(e.to_string()))?;

        Ok(())
    }
}
