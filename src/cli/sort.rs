//! `sort` command

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::input::{print_json, read_lines};
use crate::config::{OutputFormat, Settings};
use crate::utils::natural_sort;

#[derive(Args)]
pub struct SortArgs {
    /// File with one entry per line (stdin when omitted or `-`)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Reverse the order
    #[arg(short, long)]
    pub reverse: bool,
}

pub fn run(args: SortArgs, settings: &Settings) -> Result<()> {
    let mut lines = read_lines(args.input.as_deref())?;
    natural_sort(&mut lines);
    if args.reverse {
        lines.reverse();
    }

    match settings.output_format {
        OutputFormat::Text => {
            for line in &lines {
                println!("{line}");
            }
        }
        OutputFormat::Json => print_json(&lines)?,
    }
    Ok(())
}
