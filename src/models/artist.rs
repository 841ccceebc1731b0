//! Artist model.

use serde::{Deserialize, Serialize};

use super::common::{ExternalUrls, Image};

/// A full artist record as returned by artist search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    /// Spotify artist ID.
    pub id: String,

    /// Artist name.
    pub name: String,

    /// Genres associated with the artist.
    #[serde(default)]
    pub genres: Vec<String>,

    /// Popularity score (0-100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u32>,

    /// Artist images in various sizes.
    #[serde(default)]
    pub images: Vec<Image>,

    /// Web player links.
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

impl Artist {
    /// Create a new artist with ID and name.
    pub fn new<S1: Into<String>, S2: Into<String>>(id: S1, name: S2) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Get the largest image available.
    pub fn largest_image(&self) -> Option<&Image> {
        self.images.iter().max_by_key(|img| img.area())
    }
}
