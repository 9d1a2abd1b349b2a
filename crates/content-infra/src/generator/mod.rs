//! Post generator implementations - remote HTTP endpoint and template fallback.

#[cfg(feature = "http")]
mod http;
mod template;

#[cfg(feature = "http")]
pub use http::{HttpGeneratorConfig, HttpPostGenerator};
pub use template::TemplateGenerator;

/// Generator configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorConfigError {
    #[error("Invalid generator URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}
