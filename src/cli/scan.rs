//! `scan` command

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::input::print_json;
use crate::config::{OutputFormat, Settings};
use crate::scan::scan_file_for_substring;

#[derive(Args)]
pub struct ScanArgs {
    /// Text to look for
    #[arg(value_name = "TEXT")]
    pub needle: String,

    /// File to scan
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print only the number of occurrences
    #[arg(short, long)]
    pub count: bool,
}

pub fn run(args: ScanArgs, settings: &Settings) -> Result<()> {
    let offsets = scan_file_for_substring(&args.needle, &args.file)
        .with_context(|| format!("Failed to scan {}", args.file.display()))?;

    match (settings.output_format, args.count) {
        (OutputFormat::Text, true) => println!("{}", offsets.len()),
        (OutputFormat::Json, true) => print_json(&serde_json::json!({ "count": offsets.len() }))?,
        (OutputFormat::Text, false) => {
            for offset in &offsets {
                println!("{offset}");
            }
        }
        (OutputFormat::Json, false) => print_json(&offsets)?,
    }
    Ok(())
}
