//! `config` command

use anyhow::Result;

use super::input::print_json;
use crate::config::{render_settings, OutputFormat, Settings};

pub fn run(settings: &Settings) -> Result<()> {
    match settings.output_format {
        OutputFormat::Text => print!("{}", render_settings(settings)?),
        OutputFormat::Json => print_json(settings)?,
    }
    Ok(())
}
