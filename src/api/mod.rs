//! API clients for Spotify.
//!
//! This module provides two API clients:
//! - [`AuthApi`]: accounts service, exchanges client credentials for a token
//! - [`SpotifyApi`]: Web API lookups authenticated with that token

pub mod auth;
pub mod web;

pub use auth::{auth_header, basic_credential, AccessToken, AuthApi};
pub use web::{SpotifyApi, TOP_TRACKS_MAX};
