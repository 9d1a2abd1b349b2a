//! Post generator port - the remote text-generation service.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::{Platform, Tone};

/// What the generator is asked to write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub platform: Platform,
    pub tone: Tone,
}

/// Which backend produced a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationSource {
    /// A generative language model (wire value `openai`).
    Model,
    /// A canned per-platform template.
    Template,
    Other(String),
}

impl GenerationSource {
    pub fn as_str(&self) -> &str {
        match self {
            GenerationSource::Model => "openai",
            GenerationSource::Template => "template",
            GenerationSource::Other(name) => name,
        }
    }
}

impl From<&str> for GenerationSource {
    fn from(value: &str) -> Self {
        match value {
            "openai" => GenerationSource::Model,
            "template" => GenerationSource::Template,
            other => GenerationSource::Other(other.to_string()),
        }
    }
}

impl fmt::Display for GenerationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for GenerationSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GenerationSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(GenerationSource::from(raw.as_str()))
    }
}

/// A successfully generated post body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedText {
    pub text: String,
    /// `None` when the endpoint does not say.
    pub source: Option<GenerationSource>,
}

/// Generator port - one request/response cycle, no retries.
#[async_trait]
pub trait PostGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedText, GenerationError>;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}

/// Generation failures. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// The endpoint answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never got an answer.
    #[error("{0}")]
    Transport(String),

    /// A success status with a body that lacks the post text.
    #[error("Malformed generator response: {0}")]
    MalformedResponse(String),
}
