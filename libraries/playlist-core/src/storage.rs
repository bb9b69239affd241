//! Storage trait for user-scoped playlists

use crate::error::Result;
use crate::types::{NewSong, Playlist, PlaylistId, Song, SongId, User, UserId};
use async_trait::async_trait;

/// Store owning all users, playlists and songs
///
/// Every playlist operation is scoped by the owner: a playlist that exists
/// but belongs to someone else behaves exactly like one that does not exist.
/// Implementations must make uniqueness checks atomic with the write they
/// guard.
#[async_trait]
pub trait PlaylistStore: Send + Sync {
    /// Short backend name for diagnostics
    fn backend(&self) -> &'static str;

    // ========================================================================
    // Users
    // ========================================================================

    /// Create a new user with a generated ID
    async fn create_user(&self) -> Result<User>;

    /// Get user by ID
    async fn get_user(&self, id: &UserId) -> Result<Option<User>>;

    // ========================================================================
    // Playlists
    // ========================================================================

    /// Whether `user_id` may read or mutate the playlist
    async fn can_access(&self, user_id: &UserId, playlist_id: &PlaylistId) -> Result<bool>;

    /// Get the owner's playlists in creation order, without songs
    async fn get_user_playlists(&self, owner_id: &UserId) -> Result<Vec<Playlist>>;

    /// Get an owned playlist with its songs
    async fn get_playlist_with_songs(
        &self,
        owner_id: &UserId,
        id: &PlaylistId,
    ) -> Result<Option<Playlist>>;

    /// Create a playlist, failing with `Duplicate` if the owner already has the name
    async fn create_playlist(&self, owner_id: &UserId, name: &str) -> Result<Playlist>;

    /// Rename an owned playlist
    ///
    /// Fails with `PlaylistNotFound` when not owned, and with `Duplicate` when
    /// another of the owner's playlists already has `new_name`.
    async fn rename_playlist(
        &self,
        owner_id: &UserId,
        id: &PlaylistId,
        new_name: &str,
    ) -> Result<()>;

    /// Delete an owned playlist together with its songs
    async fn delete_playlist(&self, owner_id: &UserId, id: &PlaylistId) -> Result<()>;

    // ========================================================================
    // Songs
    // ========================================================================

    /// Append a song, failing with `Duplicate` if the triple is already present
    async fn add_song_to_playlist(
        &self,
        owner_id: &UserId,
        playlist_id: &PlaylistId,
        song: NewSong,
    ) -> Result<Song>;

    /// Remove a song from an owned playlist
    async fn remove_song_from_playlist(
        &self,
        owner_id: &UserId,
        playlist_id: &PlaylistId,
        song_id: &SongId,
    ) -> Result<()>;
}
