/// Playlist domain types
use crate::error::{PlaylistError, Result};
use crate::types::{PlaylistId, Song, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Playlist owned by a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Owner user ID
    pub owner_id: UserId,

    /// Playlist name, unique per owner
    pub name: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last rename or song change
    pub updated_at: DateTime<Utc>,

    /// Songs ordered by position, only loaded for detail views
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub songs: Option<Vec<Song>>,
}

impl Playlist {
    /// Create a new playlist
    pub fn new(owner_id: UserId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: PlaylistId::generate(),
            owner_id,
            name: name.into(),
            created_at: now,
            updated_at: now,
            songs: None,
        }
    }

    /// Attach the playlist's songs
    pub fn with_songs(mut self, songs: Vec<Song>) -> Self {
        self.songs = Some(songs);
        self
    }
}

/// Check a playlist name and return it unchanged
///
/// Names are compared exactly (case-sensitive) for uniqueness, so no
/// normalization happens here; a blank name is rejected.
pub fn validate_playlist_name(name: &str) -> Result<&str> {
    if name.trim().is_empty() {
        return Err(PlaylistError::invalid_input("Playlist name must not be empty"));
    }
    Ok(name)
}
