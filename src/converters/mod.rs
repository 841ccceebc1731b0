//! JSON to model converters.
//!
//! This module provides functions to walk raw Spotify Web API responses
//! and convert the records found there into typed model structures.

use serde_json::Value;

use crate::error::{Result, SpotifyError};
use crate::models::{Album, Artist, ExternalUrls, Image, Track, TrackArtist};

/// Follow a path of object keys, e.g. `["artists", "items"]`.
pub fn field_path<'a>(json: &'a Value, path: &[&str]) -> Result<&'a Value> {
    path.iter()
        .try_fold(json, |current, key| current.get(*key))
        .ok_or_else(|| SpotifyError::MissingField(path.join(".")))
}

/// Follow a path of object keys that must end at an array.
pub fn array_at<'a>(json: &'a Value, path: &[&str]) -> Result<&'a Vec<Value>> {
    field_path(json, path)?
        .as_array()
        .ok_or_else(|| SpotifyError::MissingField(path.join(".")))
}

/// Get string from JSON, returning empty string if not found.
fn get_str(json: &Value, key: &str) -> String {
    json.get(key)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

/// Get a string that the record cannot be used without.
fn require_str(json: &Value, key: &str, record: &str) -> Result<String> {
    json.get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .ok_or_else(|| SpotifyError::MissingField(format!("{}.{}", record, key)))
}

/// Get u32 from JSON.
fn get_u32(json: &Value, key: &str) -> u32 {
    json.get(key).and_then(|v| v.as_u64()).unwrap_or(0) as u32
}

/// Get u64 from JSON.
fn get_u64(json: &Value, key: &str) -> u64 {
    json.get(key).and_then(|v| v.as_u64()).unwrap_or(0)
}

/// Get bool from JSON.
fn get_bool(json: &Value, key: &str) -> bool {
    json.get(key).and_then(|v| v.as_bool()).unwrap_or(false)
}

/// Extract the `images` array.
pub fn extract_images(json: &Value) -> Vec<Image> {
    json.get("images")
        .and_then(|i| i.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|img| {
                    let url = img.get("url").and_then(|u| u.as_str())?;
                    Some(Image {
                        url: url.to_string(),
                        height: img.get("height").and_then(|h| h.as_u64()).map(|h| h as u32),
                        width: img.get("width").and_then(|w| w.as_u64()).map(|w| w as u32),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Extract genres from JSON.
fn extract_genres(json: &Value) -> Vec<String> {
    json.get("genres")
        .and_then(|g| g.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|g| g.as_str())
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}

fn extract_external_urls(json: &Value) -> ExternalUrls {
    ExternalUrls {
        spotify: json
            .get("external_urls")
            .and_then(|e| e.get("spotify"))
            .and_then(|s| s.as_str())
            .map(|s| s.to_string()),
    }
}

/// Parse the nested `artists` array of a track or album.
fn extract_track_artists(json: &Value) -> Vec<TrackArtist> {
    json.get("artists")
        .and_then(|a| a.as_array())
        .map(|arr| {
            arr.iter()
                .map(|a| TrackArtist {
                    id: get_str(a, "id"),
                    name: get_str(a, "name"),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Parse an artist from raw JSON.
pub fn parse_artist(json: &Value) -> Result<Artist> {
    Ok(Artist {
        id: require_str(json, "id", "artist")?,
        name: get_str(json, "name"),
        genres: extract_genres(json),
        popularity: json.get("popularity").and_then(|p| p.as_u64()).map(|p| p as u32),
        images: extract_images(json),
        external_urls: extract_external_urls(json),
    })
}

/// Parse an album from raw JSON.
pub fn parse_album(json: &Value) -> Result<Album> {
    Ok(Album {
        id: require_str(json, "id", "album")?,
        name: get_str(json, "name"),
        album_type: get_str(json, "album_type"),
        release_date: get_str(json, "release_date"),
        total_tracks: get_u32(json, "total_tracks"),
        artists: extract_track_artists(json),
        images: extract_images(json),
        external_urls: extract_external_urls(json),
    })
}

/// Parse a track from raw JSON.
///
/// Only `name` is required; local files come back with a null `id`.
pub fn parse_track(json: &Value) -> Result<Track> {
    Ok(Track {
        id: json.get("id").and_then(|v| v.as_str()).map(|s| s.to_string()),
        name: require_str(json, "name", "track")?,
        track_number: get_u32(json, "track_number"),
        disc_number: json
            .get("disc_number")
            .and_then(|v| v.as_u64())
            .map(|d| d as u32)
            .unwrap_or(1),
        duration_ms: get_u64(json, "duration_ms"),
        explicit: get_bool(json, "explicit"),
        popularity: json.get("popularity").and_then(|p| p.as_u64()).map(|p| p as u32),
        artists: extract_track_artists(json),
        external_urls: extract_external_urls(json),
    })
}

/// Parse every track in a JSON array, failing on the first bad record.
pub fn parse_tracks(items: &[Value]) -> Result<Vec<Track>> {
    items.iter().map(parse_track).collect()
}
