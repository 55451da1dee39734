use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, put},
    Router,
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route(
            "/api/goals",
            get(handlers::list_goals).post(handlers::create_goal),
        )
        .route("/api/goals/:id", delete(handlers::delete_goal))
        .route("/api/goals/:id/progress", get(handlers::get_progress))
        .route("/api/goals/:id/summary", get(handlers::get_summary))
        .route("/api/progress/:id", put(handlers::update_progress))
        .layer(TimeoutLayer::new(Duration::from_secs(10)))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
