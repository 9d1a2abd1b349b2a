//! Clipboard port - where "copy" sends a post's text.

/// Clipboard sink.
///
/// Copy is optimistic: callers report success without checking the result.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}
