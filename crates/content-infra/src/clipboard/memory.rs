//! In-memory clipboard - keeps the most recently copied text.
//!
//! The server has no system clipboard; the copied text is held here and
//! returned to the caller, which puts it on the user's clipboard.

use std::sync::RwLock;

use content_core::ports::{Clipboard, ClipboardError};

pub struct InMemoryClipboard {
    last: RwLock<Option<String>>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self {
            last: RwLock::new(None),
        }
    }

    /// Text of the last successful copy.
    pub fn last_copied(&self) -> Option<String> {
        self.last.read().ok().and_then(|last| last.clone())
    }
}

impl Default for InMemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for InMemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut last = self
            .last
            .write()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        *last = Some(text.to_string());
        tracing::debug!(chars = text.chars().count(), "Text copied to clipboard");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_the_latest_copy() {
        let clipboard = InMemoryClipboard::new();
        assert_eq!(clipboard.last_copied(), None);

        clipboard.write_text("first").unwrap();
        clipboard.write_text("second").unwrap();
        assert_eq!(clipboard.last_copied().as_deref(), Some("second"));
    }
}
