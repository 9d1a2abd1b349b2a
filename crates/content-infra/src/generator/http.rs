//! HTTP generation client - talks to the hosted text-generation function.

use std::time::{Duration, Instant};

use async_trait::async_trait;

use content_core::ports::{
    GeneratedText, GenerationError, GenerationRequest, GenerationSource, PostGenerator,
};
use content_shared::dto::{GenerationFailure, GenerationPayload, GenerationReply};

use super::GeneratorConfigError;

/// Message used when a failed response carries no `error` field.
pub const GENERIC_FAILURE_MESSAGE: &str = "Generation failed";

/// Generation endpoint configuration.
#[derive(Debug, Clone)]
pub struct HttpGeneratorConfig {
    /// Endpoint URL, receives a JSON POST.
    pub url: String,
    /// Request timeout; `None` leaves the client default (no timeout).
    pub timeout: Option<Duration>,
}

impl HttpGeneratorConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Returns `None` when `GENERATOR_URL` is not set.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("GENERATOR_URL")
            .ok()
            .filter(|u| !u.trim().is_empty())?;

        Some(Self {
            url,
            timeout: std::env::var("GENERATOR_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs),
        })
    }
}

/// Generator backed by a remote HTTP endpoint.
///
/// One POST per call, no retries.
pub struct HttpPostGenerator {
    http: reqwest::Client,
    config: HttpGeneratorConfig,
}

impl HttpPostGenerator {
    pub fn new(config: HttpGeneratorConfig) -> Result<Self, GeneratorConfigError> {
        if !config.url.starts_with("http://") && !config.url.starts_with("https://") {
            return Err(GeneratorConfigError::InvalidUrl(config.url));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| GeneratorConfigError::Client(e.to_string()))?;

        tracing::info!(url = %config.url, "HTTP generator configured");
        Ok(Self { http, config })
    }

    /// Create from environment configuration.
    pub fn from_env() -> Result<Option<Self>, GeneratorConfigError> {
        HttpGeneratorConfig::from_env().map(Self::new).transpose()
    }

    async fn read_failure(response: reqwest::Response) -> String {
        let body = response.text().await.unwrap_or_default();
        serde_json::from_str::<GenerationFailure>(&body)
            .ok()
            .and_then(|failure| failure.error)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
    }
}

#[async_trait]
impl PostGenerator for HttpPostGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedText, GenerationError> {
        let payload = GenerationPayload {
            topic: request.topic.clone(),
            platform: request.platform.as_str().to_string(),
            tone: request.tone.as_str().to_string(),
        };

        let start = Instant::now();
        let response = self
            .http
            .post(&self.config.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Generation request failed to send");
                GenerationError::Transport(e.to_string())
            })?;

        let status = response.status();
        tracing::debug!(
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            platform = %request.platform,
            "Generation endpoint responded"
        );

        if !status.is_success() {
            let message = Self::read_failure(response).await;
            return Err(GenerationError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let reply: GenerationReply = response
            .json()
            .await
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

        let text = reply
            .text
            .ok_or_else(|| GenerationError::MalformedResponse("missing `text` field".to_string()))?;

        Ok(GeneratedText {
            text,
            source: reply.source.as_deref().map(GenerationSource::from),
        })
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
