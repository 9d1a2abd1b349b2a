//! Clipboard implementations.

mod memory;

pub use memory::InMemoryClipboard;
