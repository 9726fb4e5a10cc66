//! Generated script and sidecar configuration emission.

use crate::config::OptionSet;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the generated shell script.
pub const SCRIPT_FILE_NAME: &str = "script.sh";
/// File name of the sidecar configuration written next to the script.
pub const CONF_FILE_NAME: &str = "script.conf";

/// Token in the script template replaced by the strict-mode preamble.
const SAFE_FLAGS_TAG: &str = "@safe_flags@";

/// Shell directives substituted for the token when the schema enables
/// safe flags.
const SAFE_FLAGS_PREAMBLE: &str = "set -o errexit
set -o nounset
set -o pipefail";

/// Body of every generated script. The safe-flags token is the only
/// substitution point.
const SCRIPT_TEMPLATE: &str = r##"#!/usr/bin/env bash
@safe_flags@
# Generated by shgen. Do not edit by hand.

usage() {
    echo "Usage: ${0##*/} [OPTIONS]" >&2
}

while [ "$#" -gt 0 ]; do
    case "$1" in
        -h|--help)
            usage
            exit 0
            ;;
        *)
            break
            ;;
    esac
done
"##;

/// Errors that can occur while writing the generated files.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to create output file {}: {}", .path.display(), .source)]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EmitError {
    fn create(path: &Path, source: std::io::Error) -> Self {
        EmitError::CreateOutput {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Render the script body for `set`, substituting the safe-flags token with
/// the preamble, or with nothing when safe flags are disabled.
pub fn render_script(set: &OptionSet) -> String {
    let preamble = if set.safe_flags {
        SAFE_FLAGS_PREAMBLE
    } else {
        ""
    };
    SCRIPT_TEMPLATE.replace(SAFE_FLAGS_TAG, preamble)
}

/// Write `script.sh` and `script.conf` into `output_dir`, returning the
/// script path.
///
/// The sidecar is reserved for future option metadata and is written empty.
/// Partial output is not removed when the second file fails.
pub fn emit_script(set: &OptionSet, output_dir: &Path) -> Result<PathBuf, EmitError> {
    let script_path = output_dir.join(SCRIPT_FILE_NAME);
    let conf_path = output_dir.join(CONF_FILE_NAME);

    let mut script = File::create(&script_path).map_err(|e| EmitError::create(&script_path, e))?;
    script
        .write_all(render_script(set).as_bytes())
        .map_err(|e| EmitError::create(&script_path, e))?;

    File::create(&conf_path).map_err(|e| EmitError::create(&conf_path, e))?;

    Ok(script_path)
}
