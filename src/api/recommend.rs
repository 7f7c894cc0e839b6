use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::{AppError, MSG_INVALID_BODY, MSG_MOOD_REQUIRED},
    server::AppState,
    spotify::{
        auth::acquire_token,
        recommendations::{self, DEFAULT_LIMIT},
    },
    types::{RecommendRequest, RecommendResponse},
};

/// `POST /recommend`
///
/// Validates the mood, fetches a fresh app token, asks Spotify for
/// recommendations and returns them. A blank mood is rejected before any
/// outbound call is made. The `mood` echoed in the response is the trimmed
/// input, not the resolved table entry.
pub async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<RecommendResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("rejected body: {}", rejection.body_text());
        AppError::Validation(MSG_INVALID_BODY.to_string())
    })?;

    let mood = request.mood.as_deref().map(str::trim).unwrap_or_default();
    if mood.is_empty() {
        return Err(AppError::Validation(MSG_MOOD_REQUIRED.to_string()));
    }

    let token = acquire_token(&state.http, &state.config)
        .await
        .map_err(|e| AppError::AuthFailure(e.to_string()))?;

    let limit = request.limit.unwrap_or(DEFAULT_LIMIT);
    let songs = recommendations::recommend(&state.http, &state.config, &token, mood, limit)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    if songs.is_empty() {
        return Err(AppError::NotFound);
    }

    tracing::info!("recommended {} songs for mood '{}'", songs.len(), mood);

    Ok(Json(RecommendResponse {
        mood: mood.to_string(),
        songs,
    }))
}
