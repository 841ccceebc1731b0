//! Album model.

use serde::{Deserialize, Serialize};

use super::common::{ExternalUrls, Image};
use super::track::TrackArtist;

/// An album record as returned by album search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Album {
    /// Spotify album ID.
    pub id: String,

    /// Album title.
    pub name: String,

    /// Album type: "album", "single", or "compilation".
    #[serde(default)]
    pub album_type: String,

    /// Release date as reported, at day, month or year precision.
    #[serde(default)]
    pub release_date: String,

    /// Total number of tracks in the album.
    #[serde(default)]
    pub total_tracks: u32,

    /// Album artists.
    #[serde(default)]
    pub artists: Vec<TrackArtist>,

    /// Cover images in various sizes.
    #[serde(default)]
    pub images: Vec<Image>,

    /// Web player links.
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

impl Album {
    /// Create a new album with ID and name.
    pub fn new<S1: Into<String>, S2: Into<String>>(id: S1, name: S2) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
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

    /// Release year, if the date carries one.
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.split('-').next().and_then(|y| y.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_year() {
        let mut album = Album::new("1", "99%");
        album.release_date = "2019-03-01".to_string();
        assert_eq!(album.release_year(), Some(2019));

        album.release_date = "1998".to_string();
        assert_eq!(album.release_year(), Some(1998));

        album.release_date = String::new();
        assert_eq!(album.release_year(), None);
    }

    #[test]
    fn test_artists_string() {
        let album = Album {
            artists: vec![
                TrackArtist::new("a", "Bruno Mars"),
                TrackArtist::new("b", "Anderson .Paak"),
            ],
            ..Album::new("1", "An Evening with Silk Sonic")
        };
        assert_eq!(album.artists_string(" & "), "Bruno Mars & Anderson .Paak");
    }
}
