//! Post generation handler.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};

use content_core::Action;
use content_core::state::Effect;
use content_shared::ApiResponse;
use content_shared::dto::FormFields;

use super::toast;
use super::workspace::merge_form;
use crate::middleware::error::{AppError, AppResult};
use crate::state::{AppState, GenerationOutcome};

/// POST /api/generate
///
/// Optional body fields overwrite the form before generation starts. A body
/// that is present but does not deserialize is rejected by the JSON error
/// handler with 400.
pub async fn generate(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: Result<web::Json<FormFields>, actix_web::Error>,
) -> actix_web::Result<HttpResponse> {
    let overrides = match body {
        Ok(body) => Some(body.into_inner()),
        Err(_) if !has_body(&req) => None,
        Err(e) => return Err(e),
    };

    Ok(run(state, overrides).await?)
}

fn has_body(req: &HttpRequest) -> bool {
    let headers = req.headers();
    headers.contains_key(header::TRANSFER_ENCODING)
        || headers
            .get(header::CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<u64>().ok())
            .is_some_and(|len| len > 0)
}

async fn run(state: web::Data<AppState>, overrides: Option<FormFields>) -> AppResult<HttpResponse> {
    let request = {
        let mut workspace = state.workspace.lock().await;
        if let Some(fields) = overrides {
            let form = merge_form(workspace.form(), fields)?;
            workspace.apply(Action::UpdateForm(form))?;
        }

        match workspace.apply(Action::BeginGeneration)?.effect {
            Some(Effect::Generate(request)) => request,
            other => {
                return Err(AppError::Internal(format!(
                    "Unexpected generation effect: {:?}",
                    other
                )));
            }
        }
    };

    // Runs detached so a dropped connection still clears the busy flag.
    let task_state = state.get_ref().clone();
    let outcome = tokio::spawn(async move { task_state.run_generation(request).await })
        .await
        .map_err(|e| AppError::Internal(format!("Generation task aborted: {}", e)))??;

    match outcome {
        GenerationOutcome::Created { post, notice } => Ok(HttpResponse::Created()
            .json(ApiResponse::ok_with_notice(post, notice.map(toast)))),
        GenerationOutcome::Failed { message } => Err(AppError::Generation(message)),
    }
}
