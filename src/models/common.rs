//! Common types shared across all models.

use serde::{Deserialize, Serialize};

/// Image with URL and dimensions.
///
/// The service omits dimensions for some user-uploaded images.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Image {
    /// URL to the image.
    pub url: String,

    /// Height in pixels, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Width in pixels, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

impl Image {
    /// Create a new image with known dimensions.
    pub fn new<S: Into<String>>(url: S, height: u32, width: u32) -> Self {
        Self {
            url: url.into(),
            height: Some(height),
            width: Some(width),
        }
    }

    /// Pixel area, treating unknown dimensions as zero.
    pub fn area(&self) -> u64 {
        u64::from(self.height.unwrap_or(0)) * u64::from(self.width.unwrap_or(0))
    }
}

/// Links to the object on the Spotify web player.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExternalUrls {
    /// Open-in-Spotify URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spotify: Option<String>,
}
