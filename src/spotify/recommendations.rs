use reqwest::Client;

use crate::{
    config::Config,
    mood::{self, MoodProfile},
    spotify::{SpotifyError, read_body},
    types::{RecommendationsResponse, RecommendedTrack, Song, Token},
};

/// Number of tracks requested when the client does not ask for a count.
pub const DEFAULT_LIMIT: u32 = 10;
/// Largest `limit` the recommendations endpoint accepts.
pub const MAX_LIMIT: u32 = 100;

/// Fetches recommendations for a mood and reshapes them into [`Song`]s.
///
/// The mood goes through [`mood::resolve`], so unknown moods get the
/// fallback profile. `limit` is clamped to `1..=MAX_LIMIT`.
///
/// An empty `Vec` means Spotify answered successfully with no tracks.
/// Transport errors, non-2xx statuses and malformed payloads are returned as
/// errors instead.
pub async fn recommend(
    client: &Client,
    config: &Config,
    token: &Token,
    mood: &str,
    limit: u32,
) -> Result<Vec<Song>, SpotifyError> {
    let profile = mood::resolve(mood);
    let url = format!("{}/recommendations", config.api_url.trim_end_matches('/'));

    let res = client
        .get(&url)
        .bearer_auth(&token.access_token)
        .query(&build_query(profile, limit))
        .send()
        .await?;

    let body = read_body(res).await?;
    let payload: RecommendationsResponse = serde_json::from_str(&body)?;

    tracing::debug!(
        "spotify returned {} tracks for mood '{}' ({})",
        payload.tracks.len(),
        mood,
        profile.mood
    );

    Ok(payload.tracks.into_iter().map(Song::from).collect())
}

/// Query parameters for the recommendations endpoint.
///
/// `target_acousticness` is only present when the profile defines it.
pub fn build_query(profile: &MoodProfile, limit: u32) -> Vec<(&'static str, String)> {
    let features = &profile.features;
    let mut params = vec![
        ("seed_genres", profile.seed_genres()),
        ("limit", clamp_limit(limit).to_string()),
        ("target_valence", features.valence.to_string()),
        ("target_energy", features.energy.to_string()),
        ("target_danceability", features.danceability.to_string()),
    ];

    if let Some(acousticness) = features.acousticness {
        params.push(("target_acousticness", acousticness.to_string()));
    }

    params
}

pub fn clamp_limit(limit: u32) -> u32 {
    limit.clamp(1, MAX_LIMIT)
}

impl From<RecommendedTrack> for Song {
    fn from(track: RecommendedTrack) -> Self {
        let artist = track
            .artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Song {
            name: track.name,
            artist,
            album: track.album.name,
            spotify_url: track.external_urls.spotify,
            preview_url: track.preview_url,
            image_url: track.album.images.into_iter().next().map(|i| i.url),
        }
    }
}
