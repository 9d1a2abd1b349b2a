//! Scheduled post handlers.

use actix_web::{HttpResponse, web};

use content_core::Action;
use content_core::domain::{PostId, ScheduledPost, parse_schedule_date};
use content_shared::ApiResponse;
use content_shared::dto::ScheduleQuery;

use super::toast;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/schedule?date=YYYY-MM-DD
///
/// Without `date`, every entry ordered by date ascending.
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ScheduleQuery>,
) -> AppResult<HttpResponse> {
    let date = query
        .into_inner()
        .date
        .map(|raw| parse_schedule_date(&raw))
        .transpose()?;

    let workspace = state.workspace.lock().await;
    let entries: Vec<ScheduledPost> = match date {
        Some(date) => workspace.schedule().for_date(date),
        None => workspace.schedule().sorted_by_date(),
    }
    .into_iter()
    .cloned()
    .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(entries)))
}

/// DELETE /api/schedule/{id}
pub async fn unschedule(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = PostId::new(path.into_inner());
    let transition = state.dispatch(Action::Unschedule(id)).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_notice(
        transition.notice.is_some(),
        transition.notice.map(toast),
    )))
}
