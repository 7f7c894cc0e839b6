//! # Spotify Integration Module
//!
//! Thin client for the two Spotify Web API calls the backend makes per
//! request:
//!
//! ```text
//! POST /recommend
//!      ↓
//! auth::acquire_token          POST {token_url}          (Basic auth)
//!      ↓
//! recommendations::recommend   GET  {api_url}/recommendations (Bearer auth)
//!      ↓
//! Vec<Song>
//! ```
//!
//! ## Authentication
//!
//! [`auth`] implements the OAuth 2.0 client-credentials grant. The app's
//! client id and secret are exchanged for an app token that carries no user
//! scope. A fresh token is requested for every recommendation; nothing is
//! cached.
//!
//! ## Recommendations
//!
//! [`recommendations`] turns a mood into query parameters via
//! [`crate::mood::resolve`] and reshapes the returned tracks into
//! [`crate::types::Song`]s.
//!
//! ## Error Handling
//!
//! Both calls return [`SpotifyError`]. There are no retries and no backoff; a
//! failed call fails the request. Timeouts are whatever `reqwest` defaults to.

pub mod auth;
pub mod recommendations;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of an outbound Spotify call.
#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("status code: {0}")]
    Status(StatusCode),
    #[error("json parse error: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("token response has no access_token")]
    MissingAccessToken,
}

impl From<StatusCode> for SpotifyError {
    fn from(code: StatusCode) -> Self {
        Self::Status(code)
    }
}

/// Reads a response body, failing on non-2xx statuses.
async fn read_body(response: reqwest::Response) -> Result<String, SpotifyError> {
    let status = response.status();
    if !status.is_success() {
        return Err(status.into());
    }
    Ok(response.text().await?)
}
