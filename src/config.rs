//! Client configuration.
//!
//! Everything the client needs is passed in explicitly through
//! [`ClientConfig`]; nothing is read from process-wide state after
//! construction.

use std::fmt;

use crate::error::{Result, SpotifyError};

/// Environment variable holding the application's client ID.
pub const CLIENT_ID_ENV: &str = "SPOTIFY_CLIENT_ID";

/// Environment variable holding the application's client secret.
pub const CLIENT_SECRET_ENV: &str = "SPOTIFY_CLIENT_SECRET";

/// Default accounts service (token endpoint host).
pub const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";

/// Default Web API base URL.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Market applied to album searches unless overridden.
pub const DEFAULT_ALBUM_MARKET: &str = "VN";

/// Country used for artist top tracks unless overridden.
pub const DEFAULT_TOP_TRACKS_COUNTRY: &str = "VN";

/// Application credentials for the client credentials flow.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Application client ID.
    pub client_id: String,
    /// Application client secret.
    pub client_secret: String,
}

impl Credentials {
    /// Create credentials from an ID and secret.
    pub fn new<S1: Into<String>, S2: Into<String>>(client_id: S1, client_secret: S2) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Create credentials, rejecting an empty ID or secret.
    ///
    /// Errors name the environment variable the value is normally read
    /// from.
    ///
    /// # Errors
    ///
    /// Returns `Config` if either value is empty.
    pub fn checked<S1: Into<String>, S2: Into<String>>(
        client_id: S1,
        client_secret: S2,
    ) -> Result<Self> {
        Ok(Self::new(
            non_empty(CLIENT_ID_ENV, client_id.into())?,
            non_empty(CLIENT_SECRET_ENV, client_secret.into())?,
        ))
    }

    /// Read credentials from `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET`.
    ///
    /// # Errors
    ///
    /// Returns `Config` if either variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::checked(required_env(CLIENT_ID_ENV)?, required_env(CLIENT_SECRET_ENV)?)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

fn required_env(name: &str) -> Result<String> {
    std::env::var(name).map_err(|e| SpotifyError::Config(format!("{}: {}", name, e)))
}

fn non_empty(name: &str, value: String) -> Result<String> {
    if value.is_empty() {
        return Err(SpotifyError::Config(format!("{} is empty", name)));
    }
    Ok(value)
}

/// Configuration for a [`SpotifyClient`](crate::SpotifyClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Application credentials.
    pub credentials: Credentials,
    /// Accounts service base URL, without trailing slash.
    pub accounts_url: String,
    /// Web API base URL, without trailing slash.
    pub api_url: String,
    /// Market filter for album searches; `None` omits the parameter.
    pub album_market: Option<String>,
    /// Country code for artist top tracks.
    pub top_tracks_country: String,
}

impl ClientConfig {
    /// Create a configuration with the public service URLs and default regions.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            accounts_url: DEFAULT_ACCOUNTS_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            album_market: Some(DEFAULT_ALBUM_MARKET.to_string()),
            top_tracks_country: DEFAULT_TOP_TRACKS_COUNTRY.to_string(),
        }
    }

    /// Override the accounts service base URL.
    pub fn with_accounts_url<S: Into<String>>(mut self, url: S) -> Self {
        self.accounts_url = trim_base(url.into());
        self
    }

    /// Override the Web API base URL.
    pub fn with_api_url<S: Into<String>>(mut self, url: S) -> Self {
        self.api_url = trim_base(url.into());
        self
    }

    /// Set or clear the album search market.
    pub fn with_album_market(mut self, market: Option<String>) -> Self {
        self.album_market = market;
        self
    }

    /// Set the country used for top tracks.
    pub fn with_top_tracks_country<S: Into<String>>(mut self, country: S) -> Self {
        self.top_tracks_country = country.into();
        self
    }

    /// Full URL of the token endpoint.
    pub fn token_url(&self) -> String {
        format!("{}/api/token", self.accounts_url)
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
