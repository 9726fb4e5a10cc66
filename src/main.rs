//! shgen - generate shell argument parsing scripts from an option schema.

use anyhow::{Context, Result};
use clap::Parser;
use shgen::pipeline;
use std::path::PathBuf;

/// Generate shell argument parsing scripts from a declarative option schema.
#[derive(Parser, Debug)]
#[command(name = "shgen", version, about)]
struct Cli {
    /// Option schema document describing the generated interface
    #[arg(long)]
    input: PathBuf,

    /// Directory receiving the generated script and its sidecar config
    #[arg(long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let script_path =
        pipeline::run(&cli.input, &cli.output).context("failed to generate script")?;

    println!("{}", script_path.display());

    Ok(())
}
