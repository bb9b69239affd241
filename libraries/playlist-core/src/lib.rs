//! Playlist Core
//!
//! Storage-agnostic domain types, validation and error handling for the
//! playlist service.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Playlist`, `Song` and their identifiers
//! - **Storage Trait**: `PlaylistStore`, implemented by `playlist-storage`
//! - **Error Handling**: Unified `PlaylistError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use playlist_core::types::{NewSong, Playlist, UserId};
//!
//! let owner = UserId::generate();
//! let playlist = Playlist::new(owner.clone(), "Road Trip");
//! assert_eq!(playlist.owner_id, owner);
//!
//! let song = NewSong::new("Roadrunner", "The Modern Lovers", "The Modern Lovers").unwrap();
//! assert_eq!(song.track, "Roadrunner");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{PlaylistError, Result};
pub use storage::PlaylistStore;

pub use types::{
    validate_playlist_name, NewSong, Playlist, PlaylistId, Song, SongId, User, UserId,
};
