use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::CorsLayer;

/// A fill-in-the-blank exercise; `answer` is always one of `options`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ClozeQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub answer: &'static str,
}

const PASSIVE_BE_PAST: ClozeQuestion = ClozeQuestion {
    question: "The book ____ written by the teacher yesterday.",
    options: ["was", "were", "is", "are"],
    answer: "was",
};

/// Exercise API, callable from any origin.
pub fn router() -> Router<super::AppState> {
    Router::new()
        .route("/api", get(status))
        .route("/api/generate-cloze", get(generate_cloze))
        .route_layer(CorsLayer::permissive())
}

/// GET /api
pub async fn status() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "Online",
            "message": "English Generator API is running!"
        })),
    )
}

/// GET /api/generate-cloze
pub async fn generate_cloze() -> impl IntoResponse {
    tracing::debug!("cloze question generated");

    (StatusCode::OK, Json(PASSIVE_BE_PAST))
}
