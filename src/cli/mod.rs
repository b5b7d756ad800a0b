//! Command-line interface for tidbits
//!
//! One subcommand per helper: `summarize`, `sort`, `average`, `find-file`,
//! `find-spec`, `scan`, `copy`, `paste` and `config`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_settings, OutputFormat};
use crate::utils::WorkingDirGuard;

mod average;
mod clip;
mod config;
mod find;
mod input;
mod scan;
mod sort;
mod summarize;

/// Small everyday helpers: prefix summaries, natural sort, path probing,
/// clipboard and file scanning
#[derive(Parser)]
#[command(name = "tidbits")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./tidbits.toml when present)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, value_name = "DIR", global = true)]
    directory: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Group lines sharing a long common prefix
    Summarize(summarize::SummarizeArgs),

    /// Sort lines in natural (numeric-aware) order
    Sort(sort::SortArgs),

    /// Sliding-window moving average of numbers
    Average(average::AverageArgs),

    /// Probe for a file at its usual relative locations
    FindFile(find::FindFileArgs),

    /// Probe for wildcard matches at their usual relative locations
    FindSpec(find::FindSpecArgs),

    /// Print byte offsets of a substring in a file
    Scan(scan::ScanArgs),

    /// Copy text (or stdin) to the clipboard
    Copy(clip::CopyArgs),

    /// Print the clipboard contents
    Paste(clip::PasteArgs),

    /// Print the effective configuration as TOML
    Config,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    // Resolve --config before -C moves us elsewhere.
    let config_path = cli.config.as_ref().map(|p| p.canonicalize().unwrap_or_else(|_| p.clone()));

    let _guard = match &cli.directory {
        Some(dir) => Some(
            WorkingDirGuard::enter(dir)
                .with_context(|| format!("Cannot change directory to {}", dir.display()))?,
        ),
        None => None,
    };

    let mut settings = load_settings(config_path.as_deref()).context("Failed to load configuration")?;
    if let Some(format) = cli.format {
        settings.output_format = format;
    }

    match cli.command {
        Commands::Summarize(args) => summarize::run(args, &settings),
        Commands::Sort(args) => sort::run(args, &settings),
        Commands::Average(args) => average::run(args, &settings),
        Commands::FindFile(args) => find::run_find_file(args, &settings),
        Commands::FindSpec(args) => find::run_find_spec(args, &settings),
        Commands::Scan(args) => scan::run(args, &settings),
        Commands::Copy(args) => clip::run_copy(args, &settings),
        Commands::Paste(args) => clip::run_paste(args, &settings),
        Commands::Config => config::run(&settings),
    }
}
