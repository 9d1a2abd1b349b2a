//! Calendar handlers.

use actix_web::{HttpResponse, web};

use content_core::Action;
use content_core::calendar::{CALENDAR_SPAN_MONTHS, MonthGrid};
use content_core::domain::parse_schedule_date;
use content_shared::ApiResponse;

use super::toast;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/calendar
///
/// The current month and the two after it.
pub async fn upcoming(state: web::Data<AppState>) -> HttpResponse {
    let today = state.today();
    let workspace = state.workspace.lock().await;

    let grids = MonthGrid::span(
        today,
        CALENDAR_SPAN_MONTHS,
        state.calendar.week_start,
        workspace.schedule(),
    );

    HttpResponse::Ok().json(ApiResponse::ok(grids))
}

/// GET /api/calendar/{year}/{month}
///
/// `month` is 1-based here.
pub async fn month(
    state: web::Data<AppState>,
    path: web::Path<(i32, u32)>,
) -> AppResult<HttpResponse> {
    let (year, month) = path.into_inner();
    if !(1..=12).contains(&month) {
        return Err(AppError::BadRequest(format!(
            "Month must be between 1 and 12, got {}",
            month
        )));
    }

    let today = state.today();
    let workspace = state.workspace.lock().await;
    let grid = MonthGrid::build(
        year,
        month - 1,
        state.calendar.week_start,
        today,
        workspace.schedule(),
    )
    .ok_or_else(|| AppError::BadRequest(format!("Year {} is out of range", year)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(grid)))
}

/// POST /api/calendar/{date}
///
/// Schedules the most recent post on the clicked day. Does nothing when
/// the library is empty.
pub async fn schedule_first(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let date = parse_schedule_date(&path.into_inner())?;

    let mut workspace = state.workspace.lock().await;
    let transition = workspace.apply(Action::ScheduleFirst { date })?;
    let entries = workspace.schedule().for_date(date).len();

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_notice(
        entries,
        transition.notice.map(toast),
    )))
}
