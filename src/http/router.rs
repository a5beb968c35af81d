//! HTTP router assembly.

use axum::Router;
use axum::middleware;
use axum::routing::get;

use super::handlers;
use super::middleware::track_request;
use super::state::AppState;

/// Build the API router with request logging attached
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/api/v1/{station}/{date}", get(handlers::temperature))
        .layer(middleware::from_fn(track_request))
        .with_state(state)
}
