//! `average` command

use anyhow::{Context, Result};
use clap::Args;

use super::input::{print_json, read_input};
use crate::config::{merge_cli_with_config, CliOverrides, OutputFormat, Settings};
use crate::utils::{format_number, moving_average};

#[derive(Args)]
pub struct AverageArgs {
    /// Values to average (read whitespace-separated from stdin when omitted)
    #[arg(value_name = "VALUES", allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// Window size
    #[arg(short, long, value_name = "N")]
    pub window: Option<usize>,
}

fn parse_values(text: &str) -> Result<Vec<f64>> {
    text.split_whitespace()
        .map(|token| token.parse::<f64>().with_context(|| format!("Not a number: '{token}'")))
        .collect()
}

pub fn run(args: AverageArgs, settings: &Settings) -> Result<()> {
    let settings = merge_cli_with_config(
        settings.clone(),
        CliOverrides { moving_average_window: args.window, ..CliOverrides::default() },
    );

    let values = if args.values.is_empty() { parse_values(&read_input(None)?)? } else { args.values };
    let means: Vec<f64> = moving_average(values, settings.moving_average_window)?.collect();

    match settings.output_format {
        OutputFormat::Text => {
            for mean in &means {
                println!("{}", format_number(*mean));
            }
        }
        OutputFormat::Json => print_json(&means)?,
    }
    Ok(())
}
