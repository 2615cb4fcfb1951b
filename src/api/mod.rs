//! # API Module
//!
//! HTTP endpoints served by spotwatch.
//!
//! ## Endpoints
//!
//! - [`read`] - `GET /api/spotify`: OAuth consent URL, authorization-code
//!   completion, artist search and playlist lookup
//! - [`write`] - `POST /api/spotify`: artist list and schedule mutations,
//!   acknowledged through the configured [`crate::management::Store`]
//! - [`health`] - `GET /health`: status and version for monitoring
//!
//! ## Errors
//!
//! Handlers return [`ApiError`]. Validation failures answer 400 with a
//! specific message, everything else answers an opaque 500 and is logged.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotwatch::api::{health, read, write};
//!
//! let app = Router::new()
//!     .route("/api/spotify", get(read).post(write))
//!     .route("/health", get(health));
//! ```

mod error;
mod health;
mod spotify;

pub use error::{ApiError, INTERNAL_SERVER_ERROR};
pub use health::health;
pub use spotify::{read, write};
