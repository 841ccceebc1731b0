//! Console report of an artist's top tracks and an album's track list.

use std::io::Write;

use tracing::info;

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::models::Track;

/// Artist looked up when none is given.
pub const DEFAULT_ARTIST: &str = "Bruno Mars";

/// Album looked up when none is given.
pub const DEFAULT_ALBUM: &str = "99%";

/// What to look up for a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// Artist whose top tracks are listed.
    pub artist_name: String,
    /// Album whose tracks are listed.
    pub album_name: String,
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self {
            artist_name: DEFAULT_ARTIST.to_string(),
            album_name: DEFAULT_ALBUM.to_string(),
        }
    }
}

/// Write tracks as a numbered list, `1. Name`, in the order given.
pub fn write_track_list<W: Write>(out: &mut W, tracks: &[Track]) -> Result<()> {
    for (i, track) in tracks.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, track.name)?;
    }
    Ok(())
}

/// Resolve both names, then print the artist's top tracks followed by the
/// album's tracks.
///
/// Both IDs are resolved before anything is written, so a failed lookup
/// leaves `out` untouched.
pub async fn run_report<W: Write>(
    client: &SpotifyClient,
    request: &ReportRequest,
    out: &mut W,
) -> Result<()> {
    let artist_id = client.artist_id(&request.artist_name).await?;
    let album_id = client.album_id(&request.album_name).await?;

    let top_tracks = client.artist_top_tracks(&artist_id).await?;
    info!(
        "{} top tracks for {}",
        top_tracks.len(),
        request.artist_name
    );
    writeln!(out, "Top tracks from {}.", request.artist_name)?;
    write_track_list(out, &top_tracks)?;

    let album_tracks = client.album_tracks(&album_id).await?;
    info!("{} tracks on {}", album_tracks.len(), request.album_name);
    writeln!(out, "Top tracks from {} album.", request.album_name)?;
    write_track_list(out, &album_tracks)?;

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_track_list() {
        let tracks = vec![Track::new("A"), Track::new("B"), Track::new("C")];
        let mut out = Vec::new();
        write_track_list(&mut out, &tracks).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1. A\n2. B\n3. C\n");
    }

    #[test]
    fn test_write_empty_list() {
        let mut out = Vec::new();
        write_track_list(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_default_request() {
        let request = ReportRequest::default();
        assert_eq!(request.artist_name, "Bruno Mars");
        assert_eq!(request.album_name, "99%");
    }
}
