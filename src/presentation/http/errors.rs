//! HTTP error handling and response conversion.
//!
//! Handlers return [`AppError`], which carries its own status code. The body is
//! a small HTML page because the only failing route, `GET /map`, answers with
//! HTML; callers can rely on the status code to detect failure.

use crate::{
    domain::location::errors::LocationError, presentation::html::render_error_page,
};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fmt;

pub const NO_LOCATIONS_MESSAGE: &str = "No valid location data found.";

#[derive(Debug)]
pub enum AppError {
    /// Request parameters failed validation (400).
    BadRequest(String),

    /// The model answered, but not with usable location data (422).
    UnprocessableData(Option<String>),

    /// The model could not be reached or failed mid-stream (502).
    ExternalService(String),

    /// The model did not answer in time (504).
    GatewayTimeout(u64),

    /// Unclassified internal error (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::UnprocessableData(Some(detail)) => {
                write!(f, "Unprocessable model reply: {}", detail)
            }
            Self::UnprocessableData(None) => write!(f, "Unprocessable model reply: empty"),
            Self::ExternalService(msg) => write!(f, "External service error: {}", msg),
            Self::GatewayTimeout(secs) => write!(f, "External service timed out after {}s", secs),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::UnprocessableData(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ExternalService(_) => StatusCode::BAD_GATEWAY,
            Self::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown on the error page.
    fn user_message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            Self::UnprocessableData(None) => NO_LOCATIONS_MESSAGE.into(),
            Self::UnprocessableData(Some(detail)) => {
                format!("{} ({})", NO_LOCATIONS_MESSAGE, detail)
            }
            Self::ExternalService(msg) => format!("Error during response generation: {}", msg),
            Self::GatewayTimeout(secs) => format!(
                "Error during response generation: no answer from the model within {} seconds",
                secs
            ),
            Self::Internal(_) => "Internal server error".into(),
        }
    }

    fn title(&self) -> &'static str {
        match self.status_code() {
            StatusCode::BAD_REQUEST => "Bad request",
            StatusCode::UNPROCESSABLE_ENTITY => "No locations",
            StatusCode::BAD_GATEWAY | StatusCode::GATEWAY_TIMEOUT => "Upstream error",
            _ => "Error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR | StatusCode::BAD_GATEWAY => {
                tracing::error!("error={}", self);
            }
            StatusCode::GATEWAY_TIMEOUT | StatusCode::UNPROCESSABLE_ENTITY => {
                tracing::warn!("error={}", self);
            }
            _ => {
                tracing::info!("error={}", self);
            }
        }

        let page = render_error_page(self.title(), &self.user_message());
        (status, Html(page)).into_response()
    }
}

// === Domain Error Conversion ===

impl From<LocationError> for AppError {
    fn from(err: LocationError) -> Self {
        match err {
            LocationError::Validation(msg) => AppError::BadRequest(msg),
            LocationError::NoLocations => AppError::UnprocessableData(None),
            LocationError::Parse(detail) => AppError::UnprocessableData(Some(detail)),
            LocationError::Upstream(msg) => AppError::ExternalService(msg),
            LocationError::Timeout(secs) => AppError::GatewayTimeout(secs),
        }
    }
}

// === Rendering Error Conversion ===

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!(serialization_error = %err, "Failed to render page data");
        AppError::Internal(err.to_string())
    }
}
