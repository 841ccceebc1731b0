//! Track-related models.
//!
//! Tracks come back from two endpoints: artist top tracks (full track
//! objects) and album tracks (simplified, no popularity). Both map onto
//! [`Track`].

use serde::{Deserialize, Serialize};

use super::common::ExternalUrls;

/// Artist when nested inside a track or album.
///
/// Contains basic identifying information only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrackArtist {
    /// Spotify artist ID.
    pub id: String,

    /// Artist name.
    pub name: String,
}

impl TrackArtist {
    /// Create a new nested artist.
    pub fn new<S1: Into<String>, S2: Into<String>>(id: S1, name: S2) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A track record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Track {
    /// Spotify track ID. Absent for local files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Track title.
    pub name: String,

    /// Position within its disc.
    #[serde(default)]
    pub track_number: u32,

    /// Disc number within the album.
    #[serde(default = "default_one")]
    pub disc_number: u32,

    /// Duration in milliseconds.
    #[serde(default)]
    pub duration_ms: u64,

    /// Whether the track has explicit lyrics.
    #[serde(default)]
    pub explicit: bool,

    /// Popularity score (0-100); not present on album track listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u32>,

    /// Track artists.
    #[serde(default)]
    pub artists: Vec<TrackArtist>,

    /// Web player links.
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

fn default_one() -> u32 {
    1
}

impl Track {
    /// Create a new track with just a name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            disc_number: 1,
            ..Default::default()
        }
    }

    /// Get all artist names joined by a separator.
    pub fn artists_string(&self, separator: &str) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Duration formatted as `m:ss`.
    pub fn duration_string(&self) -> String {
        let total_secs = self.duration_ms / 1000;
        format!("{}:{:02}", total_secs / 60, total_secs % 60)
    }
}
