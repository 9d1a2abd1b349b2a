//! Post library handlers.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use content_core::Action;
use content_core::domain::{GeneratedPost, PostId, parse_schedule_date};
use content_core::state::Effect;
use content_shared::ApiResponse;
use content_shared::dto::{SchedulePostRequest, UpdatePostRequest};

use super::toast;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EditState {
    editing_id: Option<PostId>,
}

#[derive(Serialize)]
struct CopiedText {
    text: String,
}

/// GET /api/posts
///
/// Newest first.
pub async fn list(state: web::Data<AppState>) -> HttpResponse {
    let workspace = state.workspace.lock().await;
    let posts: Vec<GeneratedPost> = workspace.posts().iter().cloned().collect();

    HttpResponse::Ok().json(ApiResponse::ok(posts))
}

/// POST /api/posts/{id}/edit
pub async fn begin_edit(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = PostId::new(path.into_inner());

    let mut workspace = state.workspace.lock().await;
    workspace.apply(Action::BeginEdit(id))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(EditState {
        editing_id: workspace.editing_id().cloned(),
    })))
}

/// PUT /api/posts/{id}
///
/// Unknown ids are ignored; `data` is then null.
pub async fn save_edit(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = PostId::new(path.into_inner());
    let text = body.into_inner().text;

    let mut workspace = state.workspace.lock().await;
    let transition = workspace.apply(Action::SaveEdit {
        id: id.clone(),
        text,
    })?;
    let post = workspace.posts().get(&id).cloned();

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_notice(
        post,
        transition.notice.map(toast),
    )))
}

/// DELETE /api/posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = PostId::new(path.into_inner());
    let transition = state.dispatch(Action::Delete(id)).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_notice(
        transition.notice.is_some(),
        transition.notice.map(toast),
    )))
}

/// POST /api/posts/{id}/copy
pub async fn copy(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = PostId::new(path.into_inner());
    let transition = state.dispatch(Action::Copy(id)).await?;

    let copied = match transition.effect {
        Some(Effect::CopyToClipboard(text)) => {
            state.copy_to_clipboard(&text);
            Some(CopiedText { text })
        }
        _ => None,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_notice(
        copied,
        transition.notice.map(toast),
    )))
}

/// POST /api/posts/{id}/schedule
pub async fn schedule(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<SchedulePostRequest>,
) -> AppResult<HttpResponse> {
    let id = PostId::new(path.into_inner());
    let date = parse_schedule_date(&body.date)?;

    let mut workspace = state.workspace.lock().await;
    let transition = workspace.apply(Action::Schedule { id: id.clone(), date })?;
    let scheduled = workspace
        .schedule()
        .for_date(date)
        .into_iter()
        .rev()
        .find(|entry| entry.id() == &id)
        .cloned()
        .ok_or_else(|| AppError::Internal(format!("Scheduled post {} missing", id)))?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_notice(
        scheduled,
        transition.notice.map(toast),
    )))
}
