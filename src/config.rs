//! JSON schema document parsing and types for shgen.

use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the schema document.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to open schema document: {0}")]
    Open(#[source] std::io::Error),

    #[error("failed to read schema document: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to parse schema document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration for a single flag of the generated interface.
#[derive(Debug, Clone, Deserialize)]
pub struct CliOption {
    /// Long option name (e.g., "verbose" for --verbose)
    pub long: Option<String>,
    /// Short option name (e.g., "v" for -v)
    pub short: Option<String>,
    /// Whether this option must be supplied
    #[serde(default)]
    pub required: bool,
    /// Whether this option takes a value
    #[serde(default)]
    pub args_required: bool,
    /// Short or long names of options this one cannot be combined with
    #[serde(default)]
    pub conflicts_with: Vec<String>,
}

impl CliOption {
    /// The long name, when present and non-empty.
    pub fn long_name(&self) -> Option<&str> {
        self.long.as_deref().filter(|name| !name.is_empty())
    }

    /// The short name, when present and non-empty.
    pub fn short_name(&self) -> Option<&str> {
        self.short.as_deref().filter(|name| !name.is_empty())
    }

    /// The name used when referring to this option in messages: the trimmed
    /// short name when non-empty, the trimmed long name otherwise.
    pub fn display_name(&self) -> &str {
        let short = self.short.as_deref().unwrap_or("").trim();
        if !short.is_empty() {
            return short;
        }
        self.long.as_deref().unwrap_or("").trim()
    }
}

impl fmt::Display for CliOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Long name: `{}`, Short name: `{}`, Required: {}",
            self.long.as_deref().unwrap_or(""),
            self.short.as_deref().unwrap_or(""),
            self.required
        )
    }
}

/// The full parsed schema for one generated CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionSet {
    /// Help text describing the generated script.
    #[serde(default)]
    pub help_message: String,
    /// Emit the defensive shell preamble into the generated script.
    #[serde(default)]
    pub safe_flags: bool,
    /// The flag configurations, in declaration order.
    #[serde(default)]
    pub options: Vec<CliOption>,
}

impl OptionSet {
    /// Parse a JSON string into an OptionSet.
    pub fn from_json(json: &str) -> Result<OptionSet, SchemaError> {
        let set: OptionSet = serde_json::from_str(json)?;
        Ok(set)
    }

    /// Load and parse the schema document at `path`.
    pub fn load(path: &Path) -> Result<OptionSet, SchemaError> {
        let mut file = File::open(path).map_err(SchemaError::Open)?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(SchemaError::Read)?;

        Self::from_json(&contents)
    }

    /// Whether any option in the set is marked required.
    pub fn has_required_options(&self) -> bool {
        self.options.iter().any(|option| option.required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(long: Option<&str>, short: Option<&str>, required: bool) -> CliOption {
        CliOption {
            long: long.map(str::to_string),
            short: short.map(str::to_string),
            required,
            args_required: false,
            conflicts_with: Vec::new(),
        }
    }

    #[test]
    fn test_parse_full_document() {
        let json = r#"{
            "help_message": "Frobnicate the widgets",
            "safe_flags": true,
            "options": [
                {
                    "long": "verbose",
                    "short": "v",
                    "required": true,
                    "args_required": false,
                    "conflicts_with": ["quiet"]
                },
                {
                    "long": "quiet",
                    "short": "q"
                }
            ]
        }"#;

        let set = OptionSet::from_json(json).unwrap();
        assert_eq!(set.help_message, "Frobnicate the widgets");
        assert!(set.safe_flags);
        assert_eq!(set.options.len(), 2);

        let verbose = &set.options[0];
        assert_eq!(verbose.long.as_deref(), Some("verbose"));
        assert_eq!(verbose.short.as_deref(), Some("v"));
        assert!(verbose.required);
        assert!(!verbose.args_required);
        assert_eq!(verbose.conflicts_with, vec!["quiet".to_string()]);

        let quiet = &set.options[1];
        assert!(!quiet.required);
        assert!(quiet.conflicts_with.is_empty());
    }

    #[test]
    fn test_parse_minimal_document() {
        let set = OptionSet::from_json("{}").unwrap();
        assert!(set.help_message.is_empty());
        assert!(!set.safe_flags);
        assert!(set.options.is_empty());
    }

    #[test]
    fn test_parse_error_on_malformed_document() {
        let result = OptionSet::from_json(r#"{"options": "not a list"}"#);
        assert!(matches!(result, Err(SchemaError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = OptionSet::load(&dir.path().join("no-such-schema.json"));
        assert!(matches!(result, Err(SchemaError::Open(_))));
    }

    #[test]
    fn test_load_reads_document_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        std::fs::write(&path, r#"{"options": [{"long": "force", "short": "f"}]}"#).unwrap();

        let set = OptionSet::load(&path).unwrap();
        assert_eq!(set.options.len(), 1);
        assert_eq!(set.options[0].long.as_deref(), Some("force"));
    }

    #[test]
    fn test_has_required_options() {
        let set = OptionSet {
            help_message: String::new(),
            safe_flags: false,
            options: vec![
                option(Some("article"), None, false),
                option(None, Some("a"), false),
                option(Some("verbose"), None, true),
            ],
        };
        assert!(set.has_required_options());

        let set = OptionSet {
            help_message: String::new(),
            safe_flags: false,
            options: vec![
                option(Some("article"), None, false),
                option(None, Some("a"), false),
            ],
        };
        assert!(!set.has_required_options());
    }

    #[test]
    fn test_option_display() {
        let opt = option(Some("verbose"), Some("v"), false);
        assert_eq!(
            opt.to_string(),
            "Long name: `verbose`, Short name: `v`, Required: false"
        );
    }

    #[test]
    fn test_option_display_with_absent_names() {
        let opt = option(None, Some("v"), true);
        assert_eq!(
            opt.to_string(),
            "Long name: ``, Short name: `v`, Required: true"
        );
    }

    #[test]
    fn test_display_name_prefers_short() {
        let opt = option(Some("verbose"), Some(" v "), false);
        assert_eq!(opt.display_name(), "v");
    }

    #[test]
    fn test_display_name_falls_back_to_long() {
        let opt = option(Some(" verbose "), None, false);
        assert_eq!(opt.display_name(), "verbose");

        let opt = option(Some("verbose"), Some("  "), false);
        assert_eq!(opt.display_name(), "verbose");
    }

    #[test]
    fn test_empty_names_are_not_reported() {
        let opt = option(Some(""), Some(""), false);
        assert_eq!(opt.long_name(), None);
        assert_eq!(opt.short_name(), None);
    }
}
