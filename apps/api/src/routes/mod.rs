pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeFile};

use crate::emotion;
use crate::intake;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let index = ServeFile::new(state.config.static_dir.join("index.html"));

    // Cross-origin access is granted to the API routes only.
    let api = Router::new()
        .route(
            "/api/upload-resume",
            post(intake::handlers::handle_upload_resume),
        )
        .route(
            "/api/analyze-face",
            post(emotion::handlers::handle_analyze_face),
        )
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/health", get(health::health_handler))
        .route_service("/", index)
        .merge(api)
        .with_state(state)
}
