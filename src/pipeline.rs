//! End-to-end generation pipeline: load, validate, emit.

use crate::config::{OptionSet, SchemaError};
use crate::emit::{self, EmitError};
use crate::validate::{self, ValidateError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by a pipeline run. Each variant names the stage that
/// failed; the wrapped error carries the specifics.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid schema document: {0}")]
    Schema(#[from] SchemaError),

    #[error("schema validation failed: {0}")]
    Validate(#[from] ValidateError),

    #[error("script emission failed: {0}")]
    Emit(#[from] EmitError),
}

/// Run the whole pipeline for the schema document at `input`, emitting into
/// `output_dir`. Returns the path of the generated script.
///
/// Stages run in a fixed order: load, conflict check, name check, uniqueness
/// check, emit. The first failure aborts the run; later stages never
/// execute, so nothing is written for an invalid schema.
pub fn run(input: &Path, output_dir: &Path) -> Result<PathBuf, PipelineError> {
    let set = OptionSet::load(input)?;

    validate::check_conflicts(&set)?;
    validate::check_names(&set)?;
    validate::check_uniqueness(&set)?;

    let script_path = emit::emit_script(&set, output_dir)?;

    Ok(script_path)
}
