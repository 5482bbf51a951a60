use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::path::Path;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub fn router(state: AppState, public_dir: &Path) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/exercises", get(handlers::exercises))
        .route("/api/login", post(handlers::login))
        .route("/api/save-progress", post(handlers::save_progress))
        .route("/api/user/:id", get(handlers::get_user))
        .route("/api/logs", post(handlers::create_log))
        .route("/api/logs/:user_id", get(handlers::list_logs))
        .route("/api/logs/:user_id/summary", get(handlers::mood_summary))
        .fallback_service(ServeDir::new(public_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
