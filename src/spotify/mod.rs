//! # Spotify Integration Module
//!
//! Thin layer between the request handlers and the Spotify services.
//!
//! ## Modules
//!
//! [`auth`] - Token acquisition against the accounts service:
//! - **Client credentials**: service-level token, fetched again for every
//!   proxied call
//! - **Authorization code**: user-level token after browser consent, relayed
//!   raw to the caller
//! - **Consent URL**: pure construction of the `/authorize` redirect
//!
//! [`client`] - Authorized calls against the Web API:
//! - `GET /search` - artist search (fixed query, 50 per page)
//! - `GET /playlists/{id}` - the configured playlist
//!
//! ## Error Types
//!
//! Every operation returns [`crate::api::ApiError`]. Upstream failures keep
//! only the status code, and the HTTP layer reports them as an opaque 500.

pub mod auth;
pub mod client;

pub use auth::TokenProvider;
pub use client::SpotifyClient;
