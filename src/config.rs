//! Configuration management for spotwatch.
//!
//! Values are read once at process start into a [`Config`] which is then
//! shared read-only with the token provider and the request handlers. The
//! configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::warning;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Process-wide settings for talking to Spotify and serving the API.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    /// Playlist relayed by the `playlist` action. `None` when unset or blank.
    pub playlist_id: Option<String>,
    pub server_addr: String,
    /// Base of the OAuth endpoints (`/authorize`, `/api/token`).
    pub accounts_url: String,
    /// Base of the Web API endpoints (`/search`, `/playlists/{id}`).
    pub api_url: String,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// Missing credentials are not fatal: they are replaced by empty strings
    /// and reported with a warning, so the upstream service rejects the
    /// exchange instead of the process refusing to start. The playlist id is
    /// only checked for presence when the `playlist` action runs.
    ///
    /// # Environment
    ///
    /// - `SPOTIFY_CLIENT_ID`
    /// - `SPOTIFY_CLIENT_SECRET`
    /// - `SPOTIFY_REDIRECT_URI`
    /// - `SPOTIFY_PLAYLIST_ID` (optional)
    /// - `SERVER_ADDRESS` (default `127.0.0.1:3000`)
    /// - `SPOTIFY_ACCOUNTS_URL` (default `https://accounts.spotify.com`)
    /// - `SPOTIFY_API_URL` (default `https://api.spotify.com/v1`)
    pub fn from_env() -> Self {
        Config {
            client_id: required("SPOTIFY_CLIENT_ID"),
            client_secret: required("SPOTIFY_CLIENT_SECRET"),
            redirect_uri: required("SPOTIFY_REDIRECT_URI"),
            playlist_id: optional("SPOTIFY_PLAYLIST_ID"),
            server_addr: optional("SERVER_ADDRESS")
                .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            accounts_url: base_url("SPOTIFY_ACCOUNTS_URL", DEFAULT_ACCOUNTS_URL),
            api_url: base_url("SPOTIFY_API_URL", DEFAULT_API_URL),
        }
    }
}

fn required(key: &str) -> String {
    match env::var(key) {
        Ok(value) => value,
        Err(_) => {
            warning!("{} is not set, Spotify calls will be rejected upstream", key);
            String::new()
        }
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn base_url(key: &str, default: &str) -> String {
    optional(key)
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist. The file itself is
/// optional: variables may come from the process environment alone.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/spotwatch/.env`
/// - macOS: `~/Library/Application Support/spotwatch/.env`
/// - Windows: `%LOCALAPPDATA%/spotwatch/.env`
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotwatch/.env");
    path
}
