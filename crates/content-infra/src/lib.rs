//! # Content Infrastructure
//!
//! Concrete implementations of the ports defined in `content-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No network client, template generator only
//! - `http` - Remote generation endpoint client via reqwest

pub mod clipboard;
pub mod generator;

pub use clipboard::InMemoryClipboard;
pub use generator::{GeneratorConfigError, TemplateGenerator};

#[cfg(feature = "http")]
pub use generator::{HttpGeneratorConfig, HttpPostGenerator};
