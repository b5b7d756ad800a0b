//! `copy` and `paste` commands

use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Write};

use super::input::{print_json, read_input};
use crate::clipboard::{copy_to_clipboard, detect_clipboard, ClipboardBackend, ClipboardReader};
use crate::config::{merge_cli_with_config, CliOverrides, OutputFormat, Settings};

#[derive(Args)]
pub struct CopyArgs {
    /// Text to copy (stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Clipboard backend: auto, native, command or memory
    #[arg(long, value_name = "BACKEND")]
    pub backend: Option<ClipboardBackend>,
}

#[derive(Args)]
pub struct PasteArgs {
    /// Clipboard backend: auto, native, command or memory
    #[arg(long, value_name = "BACKEND")]
    pub backend: Option<ClipboardBackend>,
}

fn backend_settings(settings: &Settings, backend: Option<ClipboardBackend>) -> Settings {
    merge_cli_with_config(
        settings.clone(),
        CliOverrides { clipboard_backend: backend, ..CliOverrides::default() },
    )
}

pub fn run_copy(args: CopyArgs, settings: &Settings) -> Result<()> {
    let settings = backend_settings(settings, args.backend);
    let text = match args.text {
        Some(text) => text,
        None => read_input(None)?,
    };

    let mut clipboard = detect_clipboard(settings.clipboard_backend)
        .context("No clipboard available")?;
    copy_to_clipboard(clipboard.as_mut(), &text, &mut io::stdout())
        .context("Failed to copy to clipboard")?;
    Ok(())
}

pub fn run_paste(args: PasteArgs, settings: &Settings) -> Result<()> {
    let settings = backend_settings(settings, args.backend);
    let mut clipboard = detect_clipboard(settings.clipboard_backend)
        .context("No clipboard available")?;
    let text = clipboard.get_text().context("Failed to read clipboard")?;

    match settings.output_format {
        OutputFormat::Text => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
        OutputFormat::Json => print_json(&serde_json::json!({ "text": text }))?,
    }
    Ok(())
}
