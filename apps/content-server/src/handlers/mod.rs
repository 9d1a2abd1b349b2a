//! HTTP handlers and route configuration.

mod calendar;
mod generator;
mod health;
mod posts;
mod schedule;
mod workspace;


use actix_web::web;
use content_core::state::{Notice, NoticeVariant};
use content_shared::Toast;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            // Workspace
            .route("/state", web::get().to(workspace::snapshot))
            .route("/view", web::put().to(workspace::switch_view))
            .route("/form", web::put().to(workspace::update_form))
            // Generator
            .route("/generate", web::post().to(generator::generate))
            // Post library
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("/{id}", web::put().to(posts::save_edit))
                    .route("/{id}", web::delete().to(posts::delete))
                    .route("/{id}/edit", web::post().to(posts::begin_edit))
                    .route("/{id}/copy", web::post().to(posts::copy))
                    .route("/{id}/schedule", web::post().to(posts::schedule)),
            )
            // Scheduled posts
            .service(
                web::scope("/schedule")
                    .route("", web::get().to(schedule::list))
                    .route("/{id}", web::delete().to(schedule::unschedule)),
            )
            // Calendar
            .service(
                web::scope("/calendar")
                    .route("", web::get().to(calendar::upcoming))
                    .route("/{year}/{month}", web::get().to(calendar::month))
                    .route("/{date}", web::post().to(calendar::schedule_first)),
            ),
    );
}

/// Render a workspace notice as a response toast.
pub(crate) fn toast(notice: Notice) -> Toast {
    let variant = match notice.variant {
        NoticeVariant::Default => "default",
        NoticeVariant::Destructive => "destructive",
    };
    Toast {
        title: notice.title,
        description: notice.description,
        variant: variant.to_string(),
    }
}
