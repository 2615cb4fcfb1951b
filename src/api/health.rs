use axum::response::Json;
use serde_json::{Value, json};

/// Liveness probe; does not reach Spotify.
pub async fn health() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
