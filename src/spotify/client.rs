use reqwest::{
    Client, Method, RequestBuilder,
    header::{AUTHORIZATION, HeaderMap},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    api::ApiError,
    spotify::auth::TokenProvider,
    types::{
        AddItemsRequest, Album, Artist, ArtistSearchResponse, CreatePlaylistRequest, Page,
        Playlist, Track, UserProfile,
    },
};

/// Page size of the artist search relayed by the `artists` action.
pub const ARTIST_SEARCH_LIMIT: u32 = 50;

/// Largest number of URIs Spotify accepts in one add-items call.
pub const ADD_ITEMS_CHUNK: usize = 100;

/// Release groups read when checking an artist for new music.
pub const RELEASE_GROUPS: &str = "album,single";

/// Issues calls against the Spotify Web API.
///
/// Proxy calls (`search_artists`, `get_playlist`) authorize with a fresh
/// service token. The release-check calls act on behalf of a user and take
/// that user's bearer token as their first argument.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    tokens: TokenProvider,
    http: Client,
}

impl SpotifyClient {
    /// Creates a client sharing `http`'s connection pool with `tokens`.
    pub fn new(tokens: TokenProvider, http: Client) -> Self {
        SpotifyClient { tokens, http }
    }

    /// The provider behind the service-token calls.
    pub fn tokens(&self) -> &TokenProvider {
        &self.tokens
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.tokens.config().api_url, endpoint)
    }

    /// Sends `method endpoint` with a freshly obtained service token.
    ///
    /// `headers` supplied by the caller are kept, except for any
    /// `Authorization` value which is replaced by the bearer token. Any
    /// non-2xx answer collapses into `ApiError::Upstream`.
    ///
    /// # Example
    ///
    /// ```
    /// let json = client
    ///     .authorized_request(Method::GET, "/playlists/abc", HeaderMap::new())
    ///     .await?;
    /// ```
    pub async fn authorized_request(
        &self,
        method: Method,
        endpoint: &str,
        mut headers: HeaderMap,
    ) -> Result<Value, ApiError> {
        let token = self.tokens.service_token().await?;
        headers.remove(AUTHORIZATION);

        let request = self
            .http
            .request(method, self.url(endpoint))
            .headers(headers)
            .bearer_auth(&token.access_token);
        send_json(request).await
    }

    /// Relays the fixed artist search: `q=artist`, `type=artist`, 50 results.
    ///
    /// # Returns
    ///
    /// The upstream search payload, untouched.
    pub async fn search_artists(&self) -> Result<Value, ApiError> {
        let endpoint = format!(
            "/search?q=artist&type=artist&limit={limit}",
            limit = ARTIST_SEARCH_LIMIT
        );
        self.authorized_request(Method::GET, &endpoint, HeaderMap::new())
            .await
    }

    /// Relays `GET /playlists/{playlist_id}`.
    ///
    /// # Arguments
    ///
    /// * `playlist_id` - Spotify id of the playlist, inserted into the path as-is
    pub async fn get_playlist(&self, playlist_id: &str) -> Result<Value, ApiError> {
        let endpoint = format!("/playlists/{}", playlist_id);
        self.authorized_request(Method::GET, &endpoint, HeaderMap::new())
            .await
    }

    /// Finds the best catalog match for an artist name.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Artist))` - the first search hit
    /// - `Ok(None)` - the search returned no artists
    pub async fn find_artist(&self, token: &str, name: &str) -> Result<Option<Artist>, ApiError> {
        let request = self
            .http
            .get(self.url("/search"))
            .query(&[("q", name), ("type", "artist"), ("limit", "1")])
            .bearer_auth(token);
        let res: ArtistSearchResponse = send_json(request).await?;
        Ok(res.artists.items.into_iter().next())
    }

    /// Lists the albums and singles of an artist (first page, 50 entries).
    pub async fn artist_albums(&self, token: &str, artist_id: &str) -> Result<Vec<Album>, ApiError> {
        let request = self
            .http
            .get(self.url(&format!("/artists/{}/albums", artist_id)))
            .query(&[("include_groups", RELEASE_GROUPS), ("limit", "50")])
            .bearer_auth(token);
        let page: Page<Album> = send_json(request).await?;
        Ok(page.items)
    }

    /// Lists the tracks of an album (first page, 50 entries).
    pub async fn album_tracks(&self, token: &str, album_id: &str) -> Result<Vec<Track>, ApiError> {
        let request = self
            .http
            .get(self.url(&format!("/albums/{}/tracks", album_id)))
            .query(&[("limit", "50")])
            .bearer_auth(token);
        let page: Page<Track> = send_json(request).await?;
        Ok(page.items)
    }

    /// Returns the user's playlist called `name`, creating a public one when
    /// none of the user's playlists carries that name.
    ///
    /// # Arguments
    ///
    /// * `token` - user bearer token with `playlist-read-private` and
    ///   `playlist-modify-public`
    /// * `name` - exact playlist name to look for
    ///
    /// # Example
    ///
    /// ```
    /// let playlist = client.find_or_create_playlist(&token, "New Releases Playlist").await?;
    /// ```
    pub async fn find_or_create_playlist(
        &self,
        token: &str,
        name: &str,
    ) -> Result<Playlist, ApiError> {
        let mut next = Some(format!("{}?limit=50", self.url("/me/playlists")));
        while let Some(url) = next {
            let page: Page<Playlist> = send_json(self.http.get(&url).bearer_auth(token)).await?;
            if let Some(found) = page.items.into_iter().find(|p| p.name == name) {
                return Ok(found);
            }
            next = page.next;
        }

        let user: UserProfile = send_json(self.http.get(self.url("/me")).bearer_auth(token)).await?;
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: "Automatically updated playlist with new releases from monitored artists"
                .to_string(),
            public: true,
        };
        let request = self
            .http
            .post(self.url(&format!("/users/{}/playlists", user.id)))
            .bearer_auth(token)
            .json(&body);
        send_json(request).await
    }

    /// Appends track URIs to a playlist, in chunks of [`ADD_ITEMS_CHUNK`].
    pub async fn add_items(
        &self,
        token: &str,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), ApiError> {
        for chunk in uris.chunks(ADD_ITEMS_CHUNK) {
            let body = AddItemsRequest {
                uris: chunk.to_vec(),
            };
            let request = self
                .http
                .post(self.url(&format!("/playlists/{}/tracks", playlist_id)))
                .bearer_auth(token)
                .json(&body);
            let _: Value = send_json(request).await?;
        }
        Ok(())
    }
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let res = request.send().await?;
    if !res.status().is_success() {
        return Err(ApiError::Upstream(res.status()));
    }

    Ok(res.json::<T>().await?)
}
