//! Clipboard access behind small capability traits
//!
//! Three interchangeable variants are provided:
//!
//! - [`SystemClipboard`] talks to the native clipboard through `cli-clipboard`.
//! - [`CommandClipboard`] pipes through a platform tool (`pbcopy`, `wl-copy`,
//!   `xclip`, `xsel`, `clip.exe`), which also works from WSL and minimal X setups.
//! - [`MemoryClipboard`] keeps the text in-process.
//!
//! [`detect_clipboard`] picks one from a [`ClipboardBackend`] setting.

mod command;
mod memory;
mod system;

pub use command::{CommandClipboard, ToolCommand};
pub use memory::MemoryClipboard;
pub use system::SystemClipboard;

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use tracing::{debug, info};

use crate::error::Result;

/// Something that can receive text.
pub trait ClipboardWriter {
    /// Short backend name used in logs and errors.
    fn name(&self) -> &'static str;

    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Something that can hand text back.
pub trait ClipboardReader {
    fn get_text(&mut self) -> Result<String>;
}

/// A clipboard supporting both directions.
pub trait Clipboard: ClipboardWriter + ClipboardReader {}

impl<T: ClipboardWriter + ClipboardReader> Clipboard for T {}

/// Which clipboard variant to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    /// Native clipboard when a display is reachable, command tools otherwise.
    #[default]
    Auto,
    #[serde(alias = "system")]
    Native,
    #[serde(alias = "cmd")]
    Command,
    Memory,
}

impl fmt::Display for ClipboardBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClipboardBackend::Auto => "auto",
            ClipboardBackend::Native => "native",
            ClipboardBackend::Command => "command",
            ClipboardBackend::Memory => "memory",
        };
        f.write_str(name)
    }
}

impl FromStr for ClipboardBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ClipboardBackend::Auto),
            "native" | "system" => Ok(ClipboardBackend::Native),
            "command" | "cmd" => Ok(ClipboardBackend::Command),
            "memory" => Ok(ClipboardBackend::Memory),
            invalid => {
                Err(format!("Invalid clipboard backend '{invalid}'. Use: auto|native|command|memory"))
            }
        }
    }
}

fn display_available() -> bool {
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        return true;
    }
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| env::var_os(var).is_some_and(|v| !v.is_empty()))
}

/// Build the clipboard selected by `backend`.
pub fn detect_clipboard(backend: ClipboardBackend) -> Result<Box<dyn Clipboard>> {
    let clipboard: Box<dyn Clipboard> = match backend {
        ClipboardBackend::Native => Box::new(SystemClipboard::new()),
        ClipboardBackend::Command => Box::new(CommandClipboard::detect()?),
        ClipboardBackend::Memory => Box::new(MemoryClipboard::default()),
        ClipboardBackend::Auto if display_available() => Box::new(SystemClipboard::new()),
        ClipboardBackend::Auto => Box::new(CommandClipboard::detect()?),
    };
    debug!(requested = %backend, selected = clipboard.name(), "clipboard selected");
    Ok(clipboard)
}

/// Put `text` on the clipboard and print `(copied to clipboard)` to `notice`.
///
/// The notice is best-effort; a failed write to it is not an error.
pub fn copy_to_clipboard<W: ClipboardWriter + ?Sized>(
    clipboard: &mut W,
    text: &str,
    notice: &mut dyn Write,
) -> Result<()> {
    clipboard.set_text(text)?;
    info!(backend = clipboard.name(), bytes = text.len(), "copied to clipboard");
    let _ = writeln!(notice, "(copied to clipboard)");
    Ok(())
}
