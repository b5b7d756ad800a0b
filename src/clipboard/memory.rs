use super::{ClipboardReader, ClipboardWriter};
use crate::error::Result;

/// In-process clipboard; starts empty.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: String,
}

impl ClipboardWriter for MemoryClipboard {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = text.to_string();
        Ok(())
    }
}

impl ClipboardReader for MemoryClipboard {
    fn get_text(&mut self) -> Result<String> {
        Ok(self.contents.clone())
    }
}
