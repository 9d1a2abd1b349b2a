//! Ports - trait definitions for external collaborators.
//! Infrastructure provides the implementations.

mod clipboard;
mod generator;

pub use clipboard::{Clipboard, ClipboardError};
pub use generator::{
    GeneratedText, GenerationError, GenerationRequest, GenerationSource, PostGenerator,
};
