//! Workspace handlers - state snapshot, view toggle and generator form.

use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use content_core::domain::{Platform, Tone};
use content_core::state::{GeneratorForm, View};
use content_core::{Action, Workspace};
use content_shared::ApiResponse;
use content_shared::dto::FormFields;

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    #[serde(flatten)]
    workspace: &'a Workspace,
    platforms: Vec<Platform>,
    scheduled_count: usize,
    today: NaiveDate,
}

/// Unknown view names fail deserialization and answer 400.
#[derive(Deserialize)]
pub struct SwitchViewRequest {
    view: View,
}

/// GET /api/state
pub async fn snapshot(state: web::Data<AppState>) -> HttpResponse {
    let today = state.today();
    let workspace = state.workspace.lock().await;

    HttpResponse::Ok().json(ApiResponse::ok(Snapshot {
        workspace: &workspace,
        platforms: workspace.platforms().iter().collect(),
        scheduled_count: workspace.schedule().len(),
        today,
    }))
}

/// PUT /api/view
pub async fn switch_view(
    state: web::Data<AppState>,
    body: web::Json<SwitchViewRequest>,
) -> AppResult<HttpResponse> {
    let view = body.view;
    state.dispatch(Action::SwitchView(view)).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(view)))
}

/// PUT /api/form
pub async fn update_form(
    state: web::Data<AppState>,
    body: web::Json<FormFields>,
) -> AppResult<HttpResponse> {
    let mut workspace = state.workspace.lock().await;
    let form = merge_form(workspace.form(), body.into_inner())?;

    workspace.apply(Action::UpdateForm(form))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(workspace.form())))
}

/// Overlay submitted fields on the current form.
pub(super) fn merge_form(current: &GeneratorForm, fields: FormFields) -> AppResult<GeneratorForm> {
    let platform = match fields.platform {
        Some(raw) => raw.parse::<Platform>()?,
        None => current.platform,
    };
    let tone = match fields.tone {
        Some(raw) => raw.parse::<Tone>()?,
        None => current.tone,
    };

    Ok(GeneratorForm {
        topic: fields.topic.unwrap_or_else(|| current.topic.clone()),
        platform,
        tone,
    })
}
