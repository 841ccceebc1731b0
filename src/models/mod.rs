//! Data models for Spotify Web API responses.
//!
//! Only the fields this client reads or displays are modelled; anything
//! else in the service's JSON is ignored.

pub mod album;
pub mod artist;
pub mod common;
pub mod track;

// Re-exports for convenience
pub use album::Album;
pub use artist::Artist;
pub use common::{ExternalUrls, Image};
pub use track::{Track, TrackArtist};
