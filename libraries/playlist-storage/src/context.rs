use crate::{playlists, songs, users};
use async_trait::async_trait;
use playlist_core::{error::Result, storage::PlaylistStore, types::*};
use sqlx::SqlitePool;

/// Persistent store backed by `SQLite`
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlaylistStore for SqliteStore {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    // Users
    async fn create_user(&self) -> Result<User> {
        users::create(&self.pool).await
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<User>> {
        users::get_by_id(&self.pool, id).await
    }

    // Playlists
    async fn can_access(&self, user_id: &UserId, playlist_id: &PlaylistId) -> Result<bool> {
        playlists::is_owned_by(&self.pool, playlist_id, user_id).await
    }

    async fn get_user_playlists(&self, owner_id: &UserId) -> Result<Vec<Playlist>> {
        playlists::get_user_playlists(&self.pool, owner_id).await
    }

    async fn get_playlist_with_songs(
        &self,
        owner_id: &UserId,
        id: &PlaylistId,
    ) -> Result<Option<Playlist>> {
        playlists::get_with_songs(&self.pool, id, owner_id).await
    }

    async fn create_playlist(&self, owner_id: &UserId, name: &str) -> Result<Playlist> {
        playlists::create(&self.pool, owner_id, name).await
    }

    async fn rename_playlist(
        &self,
        owner_id: &UserId,
        id: &PlaylistId,
        new_name: &str,
    ) -> Result<()> {
        playlists::rename(&self.pool, id, owner_id, new_name).await
    }

    async fn delete_playlist(&self, owner_id: &UserId, id: &PlaylistId) -> Result<()> {
        playlists::delete(&self.pool, id, owner_id).await
    }

    // Songs
    async fn add_song_to_playlist(
        &self,
        owner_id: &UserId,
        playlist_id: &PlaylistId,
        song: NewSong,
    ) -> Result<Song> {
        songs::add(&self.pool, playlist_id, owner_id, song).await
    }

    async fn remove_song_from_playlist(
        &self,
        owner_id: &UserId,
        playlist_id: &PlaylistId,
        song_id: &SongId,
    ) -> Result<()> {
        songs::remove(&self.pool, playlist_id, owner_id, song_id).await
    }
}
