use std::sync::Arc;

use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, header::AUTHORIZATION};

use crate::{
    api::ApiError,
    config::Config,
    types::{Token, TokenResponse},
};

/// Scope requested during user consent.
pub const AUTH_SCOPE: &str =
    "playlist-modify-public playlist-read-private user-read-email user-read-private";

/// Builds the `Authorization` value used against the token endpoint.
///
/// Both grant types send the same header: `Basic ` followed by the standard
/// base64 encoding of `client_id:client_secret`.
///
/// # Example
///
/// ```
/// let header = basic_auth_header("test_id", "test_secret");
/// assert_eq!(header, "Basic dGVzdF9pZDp0ZXN0X3NlY3JldA==");
/// ```
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(credentials))
}

/// Percent-encodes a query component the way browsers' `encodeURIComponent`
/// does: unreserved characters plus `!'()*` stay literal, a space becomes
/// `%20`.
///
/// # Example
///
/// ```
/// assert_eq!(encode_uri_component("cb(x) 1"), "cb(x)%201");
/// ```
pub fn encode_uri_component(value: &str) -> String {
    urlencoding::encode(value)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// Obtains bearer tokens from the Spotify accounts service.
///
/// Nothing is cached: every call to [`TokenProvider::service_token`] performs
/// a fresh client-credentials exchange.
#[derive(Debug, Clone)]
pub struct TokenProvider {
    config: Arc<Config>,
    http: Client,
}

impl TokenProvider {
    pub fn new(config: Arc<Config>, http: Client) -> Self {
        TokenProvider { config, http }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn token_url(&self) -> String {
        format!("{}/api/token", self.config.accounts_url)
    }

    fn basic_auth(&self) -> String {
        basic_auth_header(&self.config.client_id, &self.config.client_secret)
    }

    /// Performs a client-credentials exchange for service-level access.
    ///
    /// # Errors
    ///
    /// - `ApiError::Http` on network failures or an unparsable body
    /// - `ApiError::Upstream` when the token endpoint answers with a non-2xx
    ///   status; the upstream error body is not inspected
    pub async fn service_token(&self) -> Result<Token, ApiError> {
        let res = self
            .http
            .post(self.token_url())
            .header(AUTHORIZATION, self.basic_auth())
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(ApiError::Upstream(res.status()));
        }

        Ok(res.json::<Token>().await?)
    }

    /// Constructs the consent URL the browser is redirected to. No I/O.
    ///
    /// The client id is inserted as configured; the redirect URI and the
    /// scope go through [`encode_uri_component`].
    ///
    /// # Example
    ///
    /// ```
    /// let url = provider.authorization_url();
    /// // https://accounts.spotify.com/authorize?client_id=abc&response_type=code&redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fcallback&scope=playlist-modify-public%20...
    /// ```
    pub fn authorization_url(&self) -> String {
        format!(
            "{accounts}/authorize?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}",
            accounts = self.config.accounts_url,
            client_id = self.config.client_id,
            redirect_uri = encode_uri_component(&self.config.redirect_uri),
            scope = encode_uri_component(AUTH_SCOPE),
        )
    }

    /// Exchanges an authorization code for user-level tokens.
    ///
    /// The upstream payload is returned as-is, whatever the status code: it
    /// either carries `access_token`/`refresh_token` or an `error` member
    /// that the browser side inspects.
    ///
    /// # Errors
    ///
    /// - `ApiError::MissingCode` when `code` is empty; nothing is sent upstream
    /// - `ApiError::Http` on network failures or a non-JSON body
    pub async fn exchange_authorization_code(
        &self,
        code: &str,
    ) -> Result<TokenResponse, ApiError> {
        if code.is_empty() {
            return Err(ApiError::MissingCode);
        }

        let res = self
            .http
            .post(self.token_url())
            .header(AUTHORIZATION, self.basic_auth())
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ])
            .send()
            .await?;

        Ok(res.json::<TokenResponse>().await?)
    }
}
