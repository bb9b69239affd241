/// Song-in-playlist domain types
use crate::error::{PlaylistError, Result};
use crate::types::{PlaylistId, SongId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Song stored in exactly one playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Playlist this song belongs to
    pub playlist_id: PlaylistId,

    /// Track title
    pub track: String,

    /// Artist name
    pub artist: String,

    /// Album title
    pub album: String,

    /// Position in the playlist (0-indexed)
    pub position: u32,

    /// When the song was added to the playlist
    pub added_at: DateTime<Utc>,
}

impl Song {
    /// Create a song at the given position
    pub fn new(playlist_id: PlaylistId, song: NewSong, position: u32) -> Self {
        Self {
            id: SongId::generate(),
            playlist_id,
            track: song.track,
            artist: song.artist,
            album: song.album,
            position,
            added_at: Utc::now(),
        }
    }
}

/// Validated input for adding a song to a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSong {
    /// Track title
    pub track: String,
    /// Artist name
    pub artist: String,
    /// Album title
    pub album: String,
}

impl NewSong {
    /// Build a song triple, rejecting blank fields
    pub fn new(
        track: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
    ) -> Result<Self> {
        let song = Self {
            track: track.into(),
            artist: artist.into(),
            album: album.into(),
        };

        for (field, value) in [
            ("track", &song.track),
            ("artist", &song.artist),
            ("album", &song.album),
        ] {
            if value.trim().is_empty() {
                return Err(PlaylistError::invalid_input(format!(
                    "Song {field} must not be empty"
                )));
            }
        }

        Ok(song)
    }

    /// Whether an existing song has the same (track, artist, album) triple
    pub fn matches(&self, song: &Song) -> bool {
        self.track == song.track && self.artist == song.artist && self.album == song.album
    }
}
