use axum::{Extension, Router, routing::get};
use reqwest::Client;
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{
    Res, api,
    config::Config,
    info,
    management::Store,
    spotify::{SpotifyClient, TokenProvider},
};

/// Shared, read-only state handed to every request.
pub struct AppState {
    pub spotify: SpotifyClient,
    pub store: Arc<dyn Store>,
}

impl AppState {
    /// Wires one HTTP connection pool into the token provider and the API
    /// client. No token is held here.
    pub fn new(config: Arc<Config>, store: Arc<dyn Store>) -> Self {
        let http = Client::new();
        let tokens = TokenProvider::new(config, http.clone());
        AppState {
            spotify: SpotifyClient::new(tokens, http),
            store,
        }
    }
}

/// Builds the application router.
///
/// # Routes
///
/// - `GET /health`
/// - `GET /api/spotify` - read actions
/// - `POST /api/spotify` - write actions
///
/// # Example
///
/// ```
/// let state = Arc::new(AppState::new(config, Arc::new(NoopStore)));
/// let app = router(state);
/// ```
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/spotify", get(api::read).post(api::write))
        .layer(Extension(state))
}

/// Binds `config.server_addr` and serves [`router`] until the process stops.
///
/// # Errors
///
/// Returns an error if the address does not parse, cannot be bound, or the
/// server loop fails.
pub async fn start_api_server(config: Arc<Config>, store: Arc<dyn Store>) -> Res<()> {
    let addr = SocketAddr::from_str(&config.server_addr)
        .map_err(|e| format!("Failed to parse server address {}: {}", config.server_addr, e))?;

    let app = router(Arc::new(AppState::new(config, store)));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
