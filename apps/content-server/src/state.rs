//! Application state - shared across all handlers.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tokio::sync::Mutex;

use content_core::calendar::local_date;
use content_core::domain::GeneratedPost;
use content_core::ports::{Clipboard, GenerationRequest, PostGenerator};
use content_core::state::Notice;
use content_core::{Action, DomainError, Transition, Workspace};
use content_infra::{GeneratorConfigError, InMemoryClipboard, TemplateGenerator};

#[cfg(feature = "http")]
use content_infra::HttpPostGenerator;

use crate::config::{AppConfig, CalendarConfig};

/// Shared application state.
///
/// The workspace sits behind one async mutex so mutations run one at a
/// time, in arrival order.
#[derive(Clone)]
pub struct AppState {
    pub workspace: Arc<Mutex<Workspace>>,
    pub generator: Arc<dyn PostGenerator>,
    pub clipboard: Arc<dyn Clipboard>,
    pub calendar: CalendarConfig,
}

/// How a finished generation ended.
pub enum GenerationOutcome {
    Created {
        post: GeneratedPost,
        notice: Option<Notice>,
    },
    Failed {
        message: String,
    },
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub fn new(config: &AppConfig) -> Result<Self, GeneratorConfigError> {
        #[cfg(feature = "http")]
        let generator: Arc<dyn PostGenerator> = match HttpPostGenerator::from_env()? {
            Some(http) => Arc::new(http),
            None => {
                tracing::warn!("GENERATOR_URL not set. Using template generator.");
                Arc::new(TemplateGenerator::new())
            }
        };

        #[cfg(not(feature = "http"))]
        let generator: Arc<dyn PostGenerator> = {
            tracing::info!("Running without http feature - using template generator");
            Arc::new(TemplateGenerator::new())
        };

        tracing::info!("Application state initialized");

        Ok(Self::with_parts(
            Workspace::new(config.platforms.clone()),
            generator,
            Arc::new(InMemoryClipboard::new()),
            config.calendar,
        ))
    }

    pub fn with_parts(
        workspace: Workspace,
        generator: Arc<dyn PostGenerator>,
        clipboard: Arc<dyn Clipboard>,
        calendar: CalendarConfig,
    ) -> Self {
        Self {
            workspace: Arc::new(Mutex::new(workspace)),
            generator,
            clipboard,
            calendar,
        }
    }

    /// Today's date in the configured calendar timezone.
    pub fn today(&self) -> NaiveDate {
        local_date(Utc::now(), &self.calendar.timezone)
    }

    /// Apply one action to the workspace.
    pub async fn dispatch(&self, action: Action) -> Result<Transition, DomainError> {
        let mut workspace = self.workspace.lock().await;
        workspace.apply(action)
    }

    /// Call the generator and record the result.
    ///
    /// The workspace lock is not held during the call.
    pub async fn run_generation(&self, request: GenerationRequest) -> Result<GenerationOutcome, DomainError> {
        tracing::info!(
            generator = self.generator.name(),
            platform = %request.platform,
            tone = %request.tone,
            "Generating post"
        );

        let result = self.generator.generate(&request).await;

        let mut workspace = self.workspace.lock().await;
        match result {
            Ok(generated) => {
                let transition = workspace.apply(Action::GenerationSucceeded {
                    text: generated.text,
                    source: generated.source,
                    at: Utc::now(),
                })?;
                let post = workspace
                    .posts()
                    .first()
                    .cloned()
                    .ok_or_else(|| DomainError::Conflict("Generated post was not stored".to_string()))?;
                Ok(GenerationOutcome::Created {
                    post,
                    notice: transition.notice,
                })
            }
            Err(e) => {
                let message = e.to_string();
                workspace.apply(Action::GenerationFailed {
                    message: message.clone(),
                })?;
                Ok(GenerationOutcome::Failed { message })
            }
        }
    }

    /// Hand text to the clipboard. Failures are logged, never reported.
    pub fn copy_to_clipboard(&self, text: &str) {
        if let Err(e) = self.clipboard.write_text(text) {
            tracing::warn!(error = %e, "Clipboard write failed");
        }
    }
}
