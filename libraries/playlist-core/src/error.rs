/// Core error types for the playlist service
use crate::types::{PlaylistId, SongId};
use thiserror::Error;

/// Result type alias using `PlaylistError`
pub type Result<T> = std::result::Result<T, PlaylistError>;

/// Core error type for the playlist service
#[derive(Error, Debug)]
pub enum PlaylistError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Playlist does not exist or is not visible to the caller
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// Song does not exist in the given playlist
    #[error("Song not found: {0}")]
    SongNotFound(SongId),

    /// Uniqueness constraint violated
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl PlaylistError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a duplicate entry error
    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether the error means the referenced resource is absent for the caller
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PlaylistNotFound(_) | Self::SongNotFound(_))
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for PlaylistError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
