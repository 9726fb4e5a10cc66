//! shgen - shell CLI generation from a declarative option schema.
//!
//! This library provides the core functionality for loading an option-set
//! document, validating it for internal consistency, and emitting a shell
//! script plus a companion configuration file implementing that interface.

pub mod config;
pub mod emit;
pub mod pipeline;
pub mod validate;

pub use config::{CliOption, OptionSet, SchemaError};
pub use emit::{emit_script, render_script, EmitError, CONF_FILE_NAME, SCRIPT_FILE_NAME};
pub use pipeline::{run, PipelineError};
pub use validate::{check_conflicts, check_names, check_uniqueness, ValidateError};
