use super::{
    handlers::{docs, health, map},
    middleware::{logging::logging_middleware, request_id::request_id_middleware},
    state::AppState,
};
use axum::{Router, middleware, routing::get};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Map
        .route("/map", get(map::get_map))
        // Health
        .route("/health", get(health::health_check))
        // Docs
        .route("/api/v1/docs", get(docs::api_docs))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
