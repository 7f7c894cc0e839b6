//! # CLI Module
//!
//! Implementations of the `moodtracks` subcommands. `main.rs` only parses
//! arguments and dispatches here.
//!
//! - [`serve`] - runs the web backend
//! - [`moods`] - prints the mood table
//!
//! Human-facing output goes through the coloured console macros
//! ([`crate::info!`], [`crate::success!`], [`crate::warning!`],
//! [`crate::error!`]); the server itself logs through `tracing`.
//!
//! ```bash
//! moodtracks serve --address 0.0.0.0:8080 --open
//! moodtracks moods
//! ```

mod moods;
mod serve;

pub use moods::moods;
pub use serve::serve;
