//! # CLI Module
//!
//! User-facing commands of the `spotwatch` binary.
//!
//! - [`serve`] - runs the HTTP API until the process is stopped
//! - [`auth`] - prints the Spotify consent URL and opens it in the browser
//! - [`check`] - one-shot new-release check that fills a playlist
//!
//! Each command receives the [`crate::config::Config`] built once in `main`.

mod auth;
mod check;
mod serve;

pub use auth::auth;
pub use check::check;
pub use serve::serve;
