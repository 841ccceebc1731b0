//! # Spotify Lookup
//!
//! A small Rust client for read-only lookups against the Spotify Web API.
//!
//! ## Quick Start
//!
//! The easiest way to use this library is through the [`SpotifyClient`] struct:
//!
//! ```rust,no_run
//! use spotify_lookup::{ClientConfig, Credentials, SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Authenticate with SPOTIFY_CLIENT_ID / SPOTIFY_CLIENT_SECRET
//!     let config = ClientConfig::new(Credentials::from_env()?);
//!     let client = SpotifyClient::connect(config).await?;
//!
//!     // Search returns None when nothing matched
//!     match client.search_album("99%").await? {
//!         Some(album) => {
//!             for track in client.album_tracks(&album.id).await? {
//!                 println!("{}", track.name);
//!             }
//!         }
//!         None => println!("no such album"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Client credentials flow**: application-only tokens, no user login
//! - **Search** for artists and albums (best match only)
//! - **Listings** of an artist's top tracks and an album's tracks
//!
//! ## Low-Level APIs
//!
//! - [`AuthApi`] - Token endpoint
//! - [`SpotifyApi`] - Web API lookups with an existing token

pub mod api;
mod client;
pub mod config;
pub mod converters;
pub mod error;
pub mod models;
pub mod report;

// Main interface (recommended)
pub use client::SpotifyClient;
pub use config::{ClientConfig, Credentials};
pub use report::{run_report, write_track_list, ReportRequest};

// Low-level APIs
pub use api::{AccessToken, AuthApi, SpotifyApi};
pub use error::{Result, SpotifyError};
pub use models::{Album, Artist, Track};
