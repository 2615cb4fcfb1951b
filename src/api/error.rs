use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::warning;

pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No code provided")]
    MissingCode,

    #[error("Playlist ID not configured")]
    PlaylistNotConfigured,

    #[error("Invalid action")]
    InvalidAction,

    #[error("Spotify API error: {0}")]
    Upstream(reqwest::StatusCode),

    #[error("request to Spotify failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingCode | ApiError::PlaylistNotConfigured | ApiError::InvalidAction => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Upstream(_) | ApiError::Http(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            // upstream cause stays in the log only
            warning!("Spotify API error: {}", self);
            INTERNAL_SERVER_ERROR.to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
