use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    body::Bytes,
    extract::{Query, rejection::BytesRejection},
    response::Json,
};
use serde_json::{Value, json};

use crate::{
    api::ApiError,
    server::AppState,
    types::{ArtistEntry, ReadAction, Schedule, WriteAction},
};

/// `GET /api/spotify?action=...`
///
/// | action     | result                                   |
/// |------------|------------------------------------------|
/// | `auth`     | `{ "url": <consent url> }`               |
/// | `callback` | `{ "token": <raw token payload> }`       |
/// | `artists`  | upstream artist search                   |
/// | `playlist` | upstream configured playlist             |
pub async fn read(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let action = params
        .get("action")
        .and_then(|a| a.parse::<ReadAction>().ok())
        .ok_or(ApiError::InvalidAction)?;

    let spotify = &state.spotify;
    match action {
        ReadAction::Auth => Ok(Json(json!({ "url": spotify.tokens().authorization_url() }))),
        ReadAction::Callback => {
            let code = params.get("code").map(String::as_str).unwrap_or_default();
            let token = spotify.tokens().exchange_authorization_code(code).await?;
            Ok(Json(json!({ "token": token })))
        }
        ReadAction::Artists => Ok(Json(spotify.search_artists().await?)),
        ReadAction::Playlist => {
            let Some(playlist_id) = spotify.tokens().config().playlist_id.as_deref() else {
                return Err(ApiError::PlaylistNotConfigured);
            };
            Ok(Json(spotify.get_playlist(playlist_id).await?))
        }
    }
}

/// `POST /api/spotify` with `{ "action": ..., "data": {...} }`.
///
/// The body is read and parsed by hand so that an oversized body, a wrong
/// content type, malformed JSON or a non-object payload all end up as the
/// generic 500 instead of an extractor rejection.
pub async fn write(
    Extension(state): Extension<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, ApiError> {
    let body = body.map_err(|e| ApiError::Internal(e.body_text()))?;
    let body: Value =
        serde_json::from_slice(&body).map_err(|e| ApiError::Internal(e.to_string()))?;
    if !body.is_object() {
        return Err(ApiError::Internal("request body is not a JSON object".to_string()));
    }

    let action = body
        .get("action")
        .and_then(Value::as_str)
        .and_then(|a| a.parse::<WriteAction>().ok())
        .ok_or(ApiError::InvalidAction)?;
    let data = body.get("data").unwrap_or(&Value::Null);

    let store = &state.store;
    let result = match action {
        WriteAction::AddArtist => store.add_artist(ArtistEntry::from_data(data)).await,
        WriteAction::RemoveArtist => store.remove_artist(ArtistEntry::from_data(data)).await,
        WriteAction::UpdateSchedule => store.update_schedule(Schedule::from_data(data)).await,
    };
    result.map_err(ApiError::Internal)?;

    Ok(Json(json!({ "success": true })))
}
