//! Error types for the Spotify client.

use thiserror::Error;

/// Main error type for all Spotify operations.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// Credentials were rejected or the token response was unusable.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Artist search returned no match.
    #[error("Artist not found: {0}")]
    ArtistNotFound(String),

    /// Album search returned no match.
    #[error("Album not found: {0}")]
    AlbumNotFound(String),

    /// The Web API answered with a non-success status.
    #[error("Service error ({status}): {message}")]
    Service {
        /// HTTP status code.
        status: u16,
        /// Message from the service's error body, or the status reason.
        message: String,
    },

    /// An expected field is absent from a response.
    #[error("Missing field in response: {0}")]
    MissingField(String),

    /// Required configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP request failed.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for Spotify operations.
pub type Result<T> = std::result::Result<T, SpotifyError>;
