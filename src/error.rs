//! Errors surfaced at the HTTP boundary.
//!
//! Every failure a handler can produce is one of the [`AppError`] kinds. Each
//! kind maps to a fixed status code and a fixed client message; detail
//! strings carried by a variant are for the log and are never echoed back.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

pub const MSG_MOOD_REQUIRED: &str = "Mood is required";
pub const MSG_INVALID_BODY: &str = "Invalid request body";
pub const MSG_AUTH_FAILED: &str = "Failed to authenticate with Spotify";
pub const MSG_UPSTREAM_FAILED: &str = "Failed to fetch recommendations from Spotify";
pub const MSG_NO_SONGS: &str = "No songs found for this mood";
pub const MSG_INTERNAL: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum AppError {
    /// The client sent something unusable. The message is returned verbatim.
    #[error("validation error: {0}")]
    Validation(String),
    #[error("authentication with spotify failed: {0}")]
    AuthFailure(String),
    #[error("upstream error: {0}")]
    Upstream(String),
    #[error("no songs found")]
    NotFound,
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::AuthFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body.
    pub fn client_message(&self) -> &str {
        match self {
            AppError::Validation(message) => message,
            AppError::AuthFailure(_) => MSG_AUTH_FAILED,
            AppError::Upstream(_) => MSG_UPSTREAM_FAILED,
            AppError::NotFound => MSG_NO_SONGS,
            AppError::Internal(_) => MSG_INTERNAL,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(_) | AppError::NotFound => {
                tracing::debug!("request rejected: {}", self)
            }
            AppError::AuthFailure(_) | AppError::Upstream(_) => tracing::warn!("{}", self),
            AppError::Internal(_) => tracing::error!("{}", self),
        }

        let body = Json(json!({
            "error": self.client_message(),
        }));

        (self.status(), body).into_response()
    }
}
