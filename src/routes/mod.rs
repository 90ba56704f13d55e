use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};

use crate::template::{NotFoundTemplate, Template};

mod cloze;
mod contact;
mod health;
mod profile;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            lang: template.preferred_language(),
        },
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/", get(profile::page))
        .route("/contact", get(contact::page).post(contact::action))
        .merge(cloze::router())
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
