//! Schema consistency checks run before any script is emitted.

use crate::config::{CliOption, OptionSet};
use std::collections::HashSet;
use thiserror::Error;

/// Errors produced by the schema validators.
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("invalid option name: {0}")]
    InvalidName(String),

    #[error("repeated long option name: {0}")]
    DuplicateLong(String),

    #[error("repeated short option name: {0}")]
    DuplicateShort(String),

    #[error("option '{option}' conflicts with unknown option '{reference}'")]
    UnknownConflict { option: String, reference: String },
}

/// A (short, long) name pair projected from an option, used for
/// conflict-reference lookups. Names carry their surrounding whitespace
/// trimmed off.
struct Name<'a> {
    short: &'a str,
    long: &'a str,
}

impl<'a> Name<'a> {
    fn of(option: &'a CliOption) -> Self {
        Name {
            short: option.short.as_deref().unwrap_or("").trim(),
            long: option.long.as_deref().unwrap_or("").trim(),
        }
    }

    fn matches(&self, reference: &str) -> bool {
        self.short == reference || self.long == reference
    }
}

/// Every conflicts-with entry must resolve to some option's short or long
/// name. The lookup universe includes the referring option itself, so a
/// self-referential entry resolves.
pub fn check_conflicts(set: &OptionSet) -> Result<(), ValidateError> {
    let names: Vec<Name<'_>> = set.options.iter().map(Name::of).collect();

    for option in &set.options {
        for reference in &option.conflicts_with {
            if !names.iter().any(|name| name.matches(reference)) {
                return Err(ValidateError::UnknownConflict {
                    option: option.display_name().to_string(),
                    reference: reference.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Identifier check: an ASCII letter or underscore, then any run of ASCII
/// alphanumerics, underscores, or hyphens.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Every present, non-empty short and long name must pass the identifier
/// check. Absent names are exempt. Stops at the first offender.
pub fn check_names(set: &OptionSet) -> Result<(), ValidateError> {
    for option in &set.options {
        for name in [option.long_name(), option.short_name()]
            .into_iter()
            .flatten()
        {
            if !is_valid_name(name) {
                return Err(ValidateError::InvalidName(name.to_string()));
            }
        }
    }

    Ok(())
}

/// Short and long names occupy independent namespaces; within each, a
/// non-empty name may appear only once across the whole set.
pub fn check_uniqueness(set: &OptionSet) -> Result<(), ValidateError> {
    let mut long_names = HashSet::new();
    let mut short_names = HashSet::new();

    for option in &set.options {
        if let Some(long) = option.long_name() {
            if !long_names.insert(long) {
                return Err(ValidateError::DuplicateLong(long.to_string()));
            }
        }

        if let Some(short) = option.short_name() {
            if !short_names.insert(short) {
                return Err(ValidateError::DuplicateShort(short.to_string()));
            }
        }
    }

    Ok(())
}
