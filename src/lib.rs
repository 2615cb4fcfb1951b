//! spotwatch
//!
//! Backend for an artist-monitoring UI. It exchanges OAuth tokens with
//! Spotify and proxies artist search and playlist lookups. It also accepts
//! artist list and schedule mutations through a pluggable store, and can copy
//! recent releases of monitored artists into a playlist.
//!
//! # Modules
//!
//! - `api` - HTTP handlers and their error type
//! - `cli` - Command implementations of the binary
//! - `config` - Process configuration loaded from the environment
//! - `management` - Storage boundary and the new-release check
//! - `server` - Router construction and the listening loop
//! - `spotify` - Token provider and authorized Web API calls
//! - `types` - Data structures shared across modules
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use spotwatch::{config, management::NoopStore, server};
//!
//! #[tokio::main]
//! async fn main() -> spotwatch::Res<()> {
//!     config::load_env().await?;
//!     let config = Arc::new(config::Config::from_env());
//!     server::start_api_server(config, Arc::new(NoopStore)).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;

/// Result alias for startup and command paths.
///
/// Request handlers use [`api::ApiError`] instead, since their failures have
/// to be turned into HTTP responses.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational line with a blue bullet.
///
/// ```
/// info!("Listening on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success line with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error line with a red exclamation mark and exits with code 1.
///
/// Only for failures the process cannot continue from, such as a server that
/// cannot bind. Request-level errors go through [`warning!`].
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning line with a yellow exclamation mark to stderr.
///
/// Used for recoverable problems: missing configuration values and requests
/// answered with a 500.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
