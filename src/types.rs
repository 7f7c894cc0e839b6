use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Bearer token from the client-credentials exchange.
///
/// Lives for one request; the expiry is kept for logging only.
#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: i64,
}

/// Raw payload of the accounts token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
}

/// Simplified track returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Song {
    pub name: String,
    pub artist: String,
    pub album: String,
    pub spotify_url: String,
    pub preview_url: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsResponse {
    #[serde(default)]
    pub tracks: Vec<RecommendedTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendedTrack {
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub album: TrackAlbum,
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
    #[serde(default)]
    pub images: Vec<AlbumImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumImage {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

/// Body of `POST /recommend`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    pub mood: String,
    pub songs: Vec<Song>,
}

#[derive(Tabled)]
pub struct MoodTableRow {
    pub mood: String,
    pub valence: f64,
    pub energy: f64,
    pub danceability: f64,
    pub acousticness: String,
    pub tempo: u32,
    pub genres: String,
}
