//! Summarize command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use super::input::{print_json, read_lines};
use crate::config::{merge_cli_with_config, CliOverrides, OutputFormat, Settings};
use crate::summary::{render_summary, summarize};

#[derive(Args)]
pub struct SummarizeArgs {
    /// File with one string per line (stdin when omitted or `-`)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Shortest prefix length that may form a group
    #[arg(long, value_name = "N")]
    pub min_prefix_len: Option<usize>,

    /// Fraction of a string's length its prefix must exceed
    #[arg(long, value_name = "FRACTION")]
    pub min_prefix_percent: Option<f64>,

    /// Minimum number of strings per group
    #[arg(long, value_name = "N")]
    pub group_threshold: Option<usize>,
}

pub fn run(args: SummarizeArgs, settings: &Settings) -> Result<()> {
    let settings = merge_cli_with_config(
        settings.clone(),
        CliOverrides {
            min_prefix_len: args.min_prefix_len,
            min_prefix_percent: args.min_prefix_percent,
            group_threshold: args.group_threshold,
            ..CliOverrides::default()
        },
    );
    settings.validate()?;

    let lines = read_lines(args.input.as_deref())?;
    let summary = summarize(&lines, &settings.summary);
    info!(inputs = lines.len(), entries = summary.len(), "summarized");

    match settings.output_format {
        OutputFormat::Text => print!("{}", render_summary(&summary)),
        OutputFormat::Json => print_json(&summary)?,
    }
    Ok(())
}
