//! # API Module
//!
//! HTTP handlers for the moodtracks web backend, built on
//! [Axum](https://docs.rs/axum).
//!
//! ## Endpoints
//!
//! - [`index`] - `GET /`, the embedded single page UI
//! - [`health`] - `GET /health`, status and version for monitoring
//! - [`moods`] - `GET /moods`, the static mood table as JSON
//! - [`recommend`] - `POST /recommend`, mood in, song list out
//!
//! Handlers receive [`crate::server::AppState`] through axum's `State`
//! extractor and report failures as [`crate::error::AppError`].
//!
//! ```rust,ignore
//! use axum::{Router, routing::{get, post}};
//! use moodtracks::api;
//!
//! let app = Router::new()
//!     .route("/health", get(api::health))
//!     .route("/recommend", post(api::recommend))
//!     .with_state(state);
//! ```

mod health;
mod index;
mod recommend;

pub use health::health;
pub use index::{index, moods};
pub use recommend::recommend;
