use std::sync::Arc;

use reqwest::Client;

use crate::{config::Config, info, spotify::TokenProvider, success, warning};

/// Opens the Spotify consent page for the configured client.
///
/// After consent Spotify redirects to `SPOTIFY_REDIRECT_URI`, whose page is
/// expected to call `GET /api/spotify?action=callback&code=...` on a running
/// server to complete the exchange.
pub async fn auth(config: Arc<Config>) {
    let provider = TokenProvider::new(config, Client::new());
    let auth_url = provider.authorization_url();

    info!("Authorization URL:\n{}", auth_url);
    if webbrowser::open(&auth_url).is_err() {
        warning!("Failed to open browser. Please navigate to the URL above manually.");
        return;
    }

    success!("Opened consent page in the browser");
}
