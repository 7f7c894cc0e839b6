//! Runtime configuration for the moodtracks backend.
//!
//! Values come from the process environment, optionally seeded from `.env`
//! files. Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory (`<data-local-dir>/moodtracks/.env`)
//! 4. Built-in defaults
//!
//! The configuration is read once into a [`Config`] and handed to the server
//! state; nothing reads the environment after startup.

use std::{env, path::PathBuf};

/// Default Spotify accounts endpoint for the client-credentials exchange.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
/// Default base URL of the Spotify Web API.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
/// Default bind address for the web backend.
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";
/// Default directory served under `/static`.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Immutable settings shared by every request.
///
/// The client credentials are not validated here. Empty values are allowed
/// and only show up later, as an authentication failure from Spotify.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
    pub api_url: String,
    pub server_address: String,
    pub static_dir: PathBuf,
}

impl Config {
    /// Builds the configuration from the current process environment.
    pub fn from_env() -> Self {
        Self {
            client_id: env::var("SPOTIFY_CLIENT_ID").unwrap_or_default(),
            client_secret: env::var("SPOTIFY_CLIENT_SECRET").unwrap_or_default(),
            token_url: var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: var_or("SPOTIFY_API_URL", DEFAULT_API_URL),
            server_address: var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            static_dir: PathBuf::from(var_or("STATIC_DIR", DEFAULT_STATIC_DIR)),
        }
    }

    /// Returns a copy of this configuration bound to another address.
    pub fn with_server_address(mut self, address: impl Into<String>) -> Self {
        self.server_address = address.into();
        self
    }

    /// Whether both client credentials are present.
    pub fn has_credentials(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

/// Loads `.env` files into the process environment.
///
/// Both the working directory and the local data directory are tried. A
/// missing file is not an error; variables already set in the environment
/// are never overwritten.
///
/// Returns the paths that were actually loaded.
pub fn load_env() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    if let Ok(path) = dotenv::dotenv() {
        loaded.push(path);
    }

    let path = data_env_path();
    if path.is_file() && dotenv::from_path(&path).is_ok() {
        loaded.push(path);
    }

    loaded
}

/// Location of the per-user `.env` file.
pub fn data_env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("moodtracks/.env");
    path
}

fn var_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}
