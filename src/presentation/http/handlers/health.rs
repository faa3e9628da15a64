use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    model: String,
    version: &'static str,
    timestamp: DateTime<Utc>,
}

/// Liveness only: the model is not called, so this stays cheap and free.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy",
        model: state.model.model_name().to_string(),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
    };

    (StatusCode::OK, Json(response))
}
