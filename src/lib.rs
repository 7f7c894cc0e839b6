//! Mood based track recommendations backed by the Spotify Web API.
//!
//! The library exposes everything the `moodtracks` binary needs to run the
//! web backend: a static mood table, a thin Spotify client for the
//! client-credentials token exchange and the recommendations endpoint, and
//! the axum router that composes them behind `POST /recommend`.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the web backend
//! - `cli` - Command-line subcommand implementations
//! - `config` - Runtime configuration loaded from the environment
//! - `error` - The error type returned at the HTTP boundary
//! - `mood` - Mood to audio-feature/genre-seed mapping
//! - `server` - Router construction and the serve loop
//! - `spotify` - Spotify Web API client calls
//! - `types` - Data structures shared across modules
//!
//! # Example
//!
//! ```
//! use moodtracks::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> moodtracks::Res<()> {
//!     config::load_env();
//!     let config = config::Config::from_env();
//!     server::start_api_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod mood;
pub mod server;
pub mod spotify;
pub mod types;

/// A convenient Result type alias for bootstrap and CLI code.
///
/// Request handling uses [`error::AppError`] instead; this alias covers the
/// places where any error is simply reported to the terminal.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green check mark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits with code 1.
///
/// Only meant for the CLI; never call it from a request handler.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
