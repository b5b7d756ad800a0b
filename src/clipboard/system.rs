use super::{ClipboardReader, ClipboardWriter};
use crate::error::{Result, TidbitsError};

/// Native clipboard via the `cli-clipboard` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardWriter for SystemClipboard {
    fn name(&self) -> &'static str {
        "native"
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        cli_clipboard::set_contents(text.to_string())
            .map_err(|e| TidbitsError::unavailable(self.name(), e.to_string()))
    }
}

impl ClipboardReader for SystemClipboard {
    fn get_text(&mut self) -> Result<String> {
        cli_clipboard::get_contents().map_err(|e| TidbitsError::unavailable(self.name(), e.to_string()))
    }
}
