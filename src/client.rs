//! Unified Spotify client interface.
//!
//! This module provides a high-level interface that authenticates once
//! and then answers catalogue lookups for the rest of the run.

use reqwest::Client;
use tracing::debug;

use crate::api::{AccessToken, AuthApi, SpotifyApi};
use crate::config::ClientConfig;
use crate::error::{Result, SpotifyError};
use crate::models::{Album, Artist, Track};

/// Main Spotify client.
///
/// Holds the access token obtained at construction. The token is never
/// refreshed, so one client is meant to serve a single short run.
///
/// # Example
///
/// ```rust,no_run
/// use spotify_lookup::{ClientConfig, Credentials, SpotifyClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = SpotifyClient::connect(ClientConfig::new(Credentials::from_env()?)).await?;
///
///     let artist_id = client.artist_id("Bruno Mars").await?;
///     for (i, track) in client.artist_top_tracks(&artist_id).await?.iter().enumerate() {
///         println!("{}. {}", i + 1, track.name);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct SpotifyClient {
    api: SpotifyApi,
    token: AccessToken,
}

impl SpotifyClient {
    /// Authenticate with the client credentials flow and build a client.
    ///
    /// # Errors
    ///
    /// Returns `Auth` if the credentials are rejected.
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let auth = AuthApi::new(http.clone(), config.token_url());
        let token = auth.request_token(&config.credentials).await?;
        let api = SpotifyApi::new(http, &config, &token)?;

        Ok(Self { api, token })
    }

    /// The token this client authenticates with.
    pub fn token(&self) -> &AccessToken {
        &self.token
    }

    /// Search for an artist; `None` if nothing matched.
    pub async fn search_artist(&self, name: &str) -> Result<Option<Artist>> {
        self.api.search_artist(name).await
    }

    /// Search for an album; `None` if nothing matched.
    pub async fn search_album(&self, name: &str) -> Result<Option<Album>> {
        self.api.search_album(name).await
    }

    /// Resolve an artist name to its ID.
    ///
    /// # Errors
    ///
    /// Returns `ArtistNotFound` if the search is empty.
    pub async fn artist_id(&self, name: &str) -> Result<String> {
        let artist = self
            .search_artist(name)
            .await?
            .ok_or_else(|| SpotifyError::ArtistNotFound(name.to_string()))?;
        debug!("Resolved artist '{}' to {}", name, artist.id);
        Ok(artist.id)
    }

    /// Resolve an album name to its ID.
    ///
    /// # Errors
    ///
    /// Returns `AlbumNotFound` if the search is empty.
    pub async fn album_id(&self, name: &str) -> Result<String> {
        let album = self
            .search_album(name)
            .await?
            .ok_or_else(|| SpotifyError::AlbumNotFound(name.to_string()))?;
        debug!("Resolved album '{}' to {}", name, album.id);
        Ok(album.id)
    }

    /// Get an artist's top tracks.
    pub async fn artist_top_tracks(&self, artist_id: &str) -> Result<Vec<Track>> {
        self.api.artist_top_tracks(artist_id).await
    }

    /// Get an album's tracks.
    pub async fn album_tracks(&self, album_id: &str) -> Result<Vec<Track>> {
        self.api.album_tracks(album_id).await
    }
}
