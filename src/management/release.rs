use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

use crate::{
    api::ApiError,
    info,
    spotify::SpotifyClient,
    types::{AddedRelease, Album, CheckReport},
    warning,
};

/// Playlist the check writes to when no name is given.
pub const DEFAULT_PLAYLIST_NAME: &str = "New Releases Playlist";

/// Parses a Spotify `release_date`.
///
/// Dates with `year` or `month` precision resolve to the first day of that
/// period. Anything else yields `None`.
pub fn parse_release_date(release_date: &str) -> Option<NaiveDate> {
    match release_date.len() {
        4 => NaiveDate::parse_from_str(&format!("{}-01-01", release_date), "%Y-%m-%d").ok(),
        7 => NaiveDate::parse_from_str(&format!("{}-01", release_date), "%Y-%m-%d").ok(),
        _ => NaiveDate::parse_from_str(release_date, "%Y-%m-%d").ok(),
    }
}

/// Whether `album` was released within the last `days` days, both ends
/// inclusive. Releases dated after `today` are not new yet.
pub fn is_within_window(album: &Album, today: NaiveDate, days: u32) -> bool {
    let Some(date) = parse_release_date(&album.release_date) else {
        return false;
    };
    let cutoff = today - Duration::days(i64::from(days));
    cutoff <= date && date <= today
}

/// Walks the monitored artists and copies the tracks of their recent
/// releases into one playlist.
///
/// Each artist name is searched once, even when listed twice. Every
/// album inside the window is added once: ids already in `processed`, or
/// seen earlier in this run under another artist, are skipped. Added album
/// ids are inserted into `processed`.
///
/// # Arguments
///
/// * `client` - Spotify client used for the user-scoped calls
/// * `token` - user bearer token
/// * `artists` - artist names to check
/// * `playlist_name` - playlist to find or create
/// * `today` / `days` - the release window
/// * `processed` - album ids that must not be added again
///
/// # Errors
///
/// Any upstream failure aborts the check; releases added before the failure
/// stay in the playlist and in `processed`.
pub async fn check_new_releases(
    client: &SpotifyClient,
    token: &str,
    artists: &[String],
    playlist_name: &str,
    today: NaiveDate,
    days: u32,
    processed: &mut HashSet<String>,
) -> Result<CheckReport, ApiError> {
    let playlist = client.find_or_create_playlist(token, playlist_name).await?;
    let mut report = CheckReport {
        playlist_id: playlist.id.clone(),
        ..CheckReport::default()
    };

    let mut seen_artists = HashSet::new();
    for artist_name in artists {
        if !seen_artists.insert(artist_name.as_str()) {
            continue;
        }

        let Some(artist) = client.find_artist(token, artist_name).await? else {
            warning!("Artist not found: {}", artist_name);
            report.missing_artists.push(artist_name.clone());
            continue;
        };

        let albums = client.artist_albums(token, &artist.id).await?;
        for album in albums {
            if !is_within_window(&album, today, days) || processed.contains(&album.id) {
                continue;
            }

            let uris: Vec<String> = client
                .album_tracks(token, &album.id)
                .await?
                .into_iter()
                .map(|t| t.uri)
                .collect();
            if uris.is_empty() {
                continue;
            }

            client.add_items(token, &playlist.id, &uris).await?;
            info!(
                "Added {} tracks from {} by {}",
                uris.len(),
                album.name,
                artist_name
            );
            processed.insert(album.id.clone());
            report.added.push(AddedRelease {
                artist: artist_name.clone(),
                album_id: album.id,
                album: album.name,
                tracks: uris.len(),
            });
        }
    }

    Ok(report)
}
