//! `find-file` and `find-spec` commands

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use super::input::print_json;
use crate::config::{OutputFormat, Settings};
use crate::search::{find_file_spec, find_relative_file};

#[derive(Args)]
pub struct FindFileArgs {
    /// Directory to probe under
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Relative paths of the usual locations, tried in order
    #[arg(value_name = "CANDIDATE", required = true)]
    pub candidates: Vec<PathBuf>,
}

#[derive(Args)]
pub struct FindSpecArgs {
    /// Directory to probe under
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Relative wildcard patterns, tried in order
    #[arg(value_name = "PATTERN", required = true)]
    pub patterns: Vec<String>,
}

fn report(found: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", found.display()),
        OutputFormat::Json => print_json(&serde_json::json!({ "path": found }))?,
    }
    Ok(())
}

pub fn run_find_file(args: FindFileArgs, settings: &Settings) -> Result<()> {
    match find_relative_file(&args.root, &args.candidates) {
        Some(found) => report(&found, settings.output_format),
        None => anyhow::bail!(
            "No file found under {} for: {}",
            args.root.display(),
            args.candidates.iter().map(|c| c.display().to_string()).collect::<Vec<_>>().join(", ")
        ),
    }
}

pub fn run_find_spec(args: FindSpecArgs, settings: &Settings) -> Result<()> {
    match find_file_spec(&args.root, &args.patterns)? {
        Some(found) => report(&found, settings.output_format),
        None => anyhow::bail!(
            "No match under {} for: {}",
            args.root.display(),
            args.patterns.join(", ")
        ),
    }
}
