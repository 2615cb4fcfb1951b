use std::{collections::HashSet, sync::Arc};

use chrono::Utc;
use reqwest::Client;

use crate::{
    config::Config,
    error, info,
    management::check_new_releases,
    spotify::{SpotifyClient, TokenProvider},
    success, warning,
};

/// Runs one new-release check for `artists` and reports what was added.
///
/// # Arguments
///
/// * `config` - process configuration (API base URL)
/// * `token` - user bearer token, e.g. the `access_token` returned by the
///   `callback` action
/// * `days` - size of the release window, counted back from today
/// * `playlist` - name of the playlist to find or create
/// * `artists` - artist names to check
pub async fn check(
    config: Arc<Config>,
    token: String,
    days: u32,
    playlist: String,
    artists: Vec<String>,
) {
    if artists.is_empty() {
        warning!("No artists given, nothing to check");
        return;
    }

    let http = Client::new();
    let client = SpotifyClient::new(TokenProvider::new(config, http.clone()), http);
    let today = Utc::now().date_naive();

    info!(
        "Checking {} artists for releases since {}",
        artists.len(),
        today - chrono::Duration::days(i64::from(days))
    );

    let mut processed = HashSet::new();
    match check_new_releases(&client, &token, &artists, &playlist, today, days, &mut processed)
        .await
    {
        Ok(report) => {
            if !report.missing_artists.is_empty() {
                info!("{} artists had no catalog match", report.missing_artists.len());
            }
            let tracks: usize = report.added.iter().map(|r| r.tracks).sum();
            success!(
                "Added {} releases ({} tracks) to {}",
                report.added.len(),
                tracks,
                playlist
            );
        }
        Err(e) => error!("Release check failed. Err: {}", e),
    }
}
