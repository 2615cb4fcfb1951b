use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Access token issued by the Spotify accounts service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Raw payload of an authorization-code exchange, relayed untouched.
pub type TokenResponse = Value;

/// Actions served by `GET /api/spotify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadAction {
    Auth,
    Callback,
    Artists,
    Playlist,
}

impl FromStr for ReadAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auth" => Ok(ReadAction::Auth),
            "callback" => Ok(ReadAction::Callback),
            "artists" => Ok(ReadAction::Artists),
            "playlist" => Ok(ReadAction::Playlist),
            _ => Err(()),
        }
    }
}

/// Actions served by `POST /api/spotify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    AddArtist,
    RemoveArtist,
    UpdateSchedule,
}

impl FromStr for WriteAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add-artist" => Ok(WriteAction::AddArtist),
            "remove-artist" => Ok(WriteAction::RemoveArtist),
            "update-schedule" => Ok(WriteAction::UpdateSchedule),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtistEntry {
    pub artist: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Hourly,
    #[default]
    Daily,
    Weekly,
}

/// When monitored artists are checked. `time` is only meaningful for daily
/// and weekly cadences, `day` only for weekly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    #[serde(rename = "type")]
    pub cadence: Cadence,
    pub time: String,
    pub day: Weekday,
}

impl Default for Schedule {
    fn default() -> Self {
        Schedule {
            cadence: Cadence::Daily,
            time: "00:00".to_string(),
            day: Weekday::Mon,
        }
    }
}

impl ArtistEntry {
    /// Reads the `data` member of a write request; shapes that don't match
    /// yield the default entry.
    pub fn from_data(data: &Value) -> Self {
        serde_json::from_value(data.clone()).unwrap_or_default()
    }
}

impl Schedule {
    pub fn from_data(data: &Value) -> Self {
        serde_json::from_value(data.clone()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistSearchResponse {
    pub artists: Page<Artist>,
}

/// One page of a Spotify paging object; only the items are read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub release_date: String,
    #[serde(default)]
    pub release_date_precision: Option<String>,
    #[serde(default)]
    pub album_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItemsRequest {
    pub uris: Vec<String>,
}

/// Release added to the playlist during a check.
#[derive(Debug, Clone, PartialEq)]
pub struct AddedRelease {
    pub artist: String,
    pub album_id: String,
    pub album: String,
    pub tracks: usize,
}

/// Outcome of one new-release check.
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub playlist_id: String,
    pub added: Vec<AddedRelease>,
    pub missing_artists: Vec<String>,
}
