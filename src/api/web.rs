//! Spotify Web API client.
//!
//! Read-only lookups against the public catalogue: artist and album
//! search, an artist's top tracks and an album's track listing. Every
//! request carries the bearer token obtained through [`AuthApi`](super::AuthApi).

use reqwest::header::HeaderMap;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::api::auth::{auth_header, AccessToken};
use crate::config::ClientConfig;
use crate::converters;
use crate::error::{Result, SpotifyError};
use crate::models::{Album, Artist, Track};

/// The service returns at most this many top tracks for an artist.
pub const TOP_TRACKS_MAX: usize = 10;

/// Searches only ever ask for the best match.
const SEARCH_LIMIT: &str = "1";

/// Authenticated Web API client.
///
/// # Example
///
/// ```rust,no_run
/// use reqwest::Client;
/// use spotify_lookup::api::{AccessToken, SpotifyApi};
/// use spotify_lookup::config::{ClientConfig, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ClientConfig::new(Credentials::from_env()?);
///     let api = SpotifyApi::new(Client::new(), &config, &AccessToken::new("token"))?;
///     if let Some(artist) = api.search_artist("Bruno Mars").await? {
///         println!("{} ({})", artist.name, artist.id);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SpotifyApi {
    client: Client,
    base_url: String,
    headers: HeaderMap,
    album_market: Option<String>,
    top_tracks_country: String,
}

impl SpotifyApi {
    /// Create a Web API client that authenticates with `token`.
    ///
    /// # Errors
    ///
    /// Returns `Auth` if the token cannot be placed in a header.
    pub fn new(client: Client, config: &ClientConfig, token: &AccessToken) -> Result<Self> {
        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            headers: auth_header(token)?,
            album_market: config.album_market.clone(),
            top_tracks_country: config.top_tracks_country.clone(),
        })
    }

    /// Build an endpoint URL below the base URL.
    ///
    /// Each segment is percent-encoded on its own, so an ID containing `/`,
    /// `?` or `#` stays inside its segment.
    fn endpoint_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            SpotifyError::Config(format!("Invalid API URL {}: {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| SpotifyError::Config(format!("Invalid API URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Make an authenticated GET request with query parameters.
    async fn get_api(&self, segments: &[&str], params: &[(&str, &str)]) -> Result<Value> {
        let url = self.endpoint_url(segments)?;
        debug!("GET {} with params: {:?}", url, params);

        let response = self
            .client
            .get(url)
            .headers(self.headers.clone())
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|data| {
                    data.get("error")
                        .and_then(|e| e.get("message"))
                        .and_then(|m| m.as_str())
                        .map(|m| m.to_string())
                })
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            error!("Spotify API error ({}): {}", status.as_u16(), message);
            return Err(SpotifyError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Run a single-result search and return the first item, if any.
    async fn search_first(
        &self,
        query: &str,
        kind: &str,
        market: Option<&str>,
    ) -> Result<Option<Value>> {
        let mut params = vec![("q", query), ("type", kind), ("limit", SEARCH_LIMIT)];
        if let Some(market) = market {
            params.push(("market", market));
        }

        let response = self.get_api(&["search"], &params).await?;
        let items_key = format!("{}s", kind);
        let items = converters::array_at(&response, &[items_key.as_str(), "items"])?;

        Ok(items.first().cloned())
    }

    /// Search for an artist by name and return the best match.
    ///
    /// `Ok(None)` means the service found nothing.
    pub async fn search_artist(&self, name: &str) -> Result<Option<Artist>> {
        match self.search_first(name, "artist", None).await? {
            Some(json) => converters::parse_artist(&json).map(Some),
            None => {
                warn!("Artist doesn't exist: {}", name);
                Ok(None)
            }
        }
    }

    /// Search for an album by name and return the best match.
    ///
    /// Restricted to the configured market, if any. `Ok(None)` means the
    /// service found nothing.
    pub async fn search_album(&self, name: &str) -> Result<Option<Album>> {
        match self
            .search_first(name, "album", self.album_market.as_deref())
            .await?
        {
            Some(json) => converters::parse_album(&json).map(Some),
            None => {
                warn!("No album with this name exists: {}", name);
                Ok(None)
            }
        }
    }

    /// Get an artist's top tracks in the configured country.
    pub async fn artist_top_tracks(&self, artist_id: &str) -> Result<Vec<Track>> {
        let response = self
            .get_api(
                &["artists", artist_id, "top-tracks"],
                &[("country", self.top_tracks_country.as_str())],
            )
            .await?;

        let tracks = converters::parse_tracks(converters::array_at(&response, &["tracks"])?)?;
        debug!("Fetched {} top tracks for artist {}", tracks.len(), artist_id);
        Ok(tracks)
    }

    /// Get the tracks of an album.
    ///
    /// Only the first page the service returns is read.
    pub async fn album_tracks(&self, album_id: &str) -> Result<Vec<Track>> {
        let response = self
            .get_api(&["albums", album_id, "tracks"], &[])
            .await?;

        let tracks = converters::parse_tracks(converters::array_at(&response, &["items"])?)?;
        debug!("Fetched {} tracks for album {}", tracks.len(), album_id);
        Ok(tracks)
    }
}
