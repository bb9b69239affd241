//! In-memory store
//!
//! All maps live behind a single `RwLock`, so every uniqueness check runs
//! under the same write guard as the insert or rename it protects.

use async_trait::async_trait;
use chrono::Utc;
use playlist_core::{error::Result, storage::PlaylistStore, types::*, PlaylistError};
use std::collections::HashMap;
use tokio::sync::RwLock;

struct StoredPlaylist {
    /// Insertion sequence, used for stable listing order
    seq: u64,
    playlist: Playlist,
    songs: Vec<Song>,
}

#[derive(Default)]
struct Inner {
    users: HashMap<UserId, User>,
    playlists: HashMap<PlaylistId, StoredPlaylist>,
    next_seq: u64,
}

impl Inner {
    fn owned_mut(&mut self, owner_id: &UserId, id: &PlaylistId) -> Result<&mut StoredPlaylist> {
        self.playlists
            .get_mut(id)
            .filter(|stored| &stored.playlist.owner_id == owner_id)
            .ok_or_else(|| PlaylistError::PlaylistNotFound(id.clone()))
    }

    fn name_taken(&self, owner_id: &UserId, name: &str, except: Option<&PlaylistId>) -> bool {
        self.playlists.values().any(|stored| {
            &stored.playlist.owner_id == owner_id
                && stored.playlist.name == name
                && Some(&stored.playlist.id) != except
        })
    }
}

/// Ephemeral store holding everything in process memory
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlaylistStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn create_user(&self) -> Result<User> {
        let user = User::new();
        self.inner
            .write()
            .await
            .users
            .insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<User>> {
        Ok(self.inner.read().await.users.get(id).cloned())
    }

    async fn can_access(&self, user_id: &UserId, playlist_id: &PlaylistId) -> Result<bool> {
        let inner = self.inner.read().await;
        Ok(inner
            .playlists
            .get(playlist_id)
            .is_some_and(|stored| &stored.playlist.owner_id == user_id))
    }

    async fn get_user_playlists(&self, owner_id: &UserId) -> Result<Vec<Playlist>> {
        let inner = self.inner.read().await;
        let mut owned: Vec<&StoredPlaylist> = inner
            .playlists
            .values()
            .filter(|stored| &stored.playlist.owner_id == owner_id)
            .collect();
        owned.sort_by_key(|stored| stored.seq);

        Ok(owned
            .into_iter()
            .map(|stored| stored.playlist.clone())
            .collect())
    }

    async fn get_playlist_with_songs(
        &self,
        owner_id: &UserId,
        id: &PlaylistId,
    ) -> Result<Option<Playlist>> {
        let inner = self.inner.read().await;
        Ok(inner
            .playlists
            .get(id)
            .filter(|stored| &stored.playlist.owner_id == owner_id)
            .map(|stored| stored.playlist.clone().with_songs(stored.songs.clone())))
    }

    async fn create_playlist(&self, owner_id: &UserId, name: &str) -> Result<Playlist> {
        let mut inner = self.inner.write().await;

        if inner.name_taken(owner_id, name, None) {
            return Err(PlaylistError::duplicate(format!(
                "Playlist '{name}' already exists"
            )));
        }

        let playlist = Playlist::new(owner_id.clone(), name);
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.playlists.insert(
            playlist.id.clone(),
            StoredPlaylist {
                seq,
                playlist: playlist.clone(),
                songs: Vec::new(),
            },
        );

        Ok(playlist)
    }

    async fn rename_playlist(
        &self,
        owner_id: &UserId,
        id: &PlaylistId,
        new_name: &str,
    ) -> Result<()> {
        let mut inner = self.inner.write().await;

        inner.owned_mut(owner_id, id)?;
        if inner.name_taken(owner_id, new_name, Some(id)) {
            return Err(PlaylistError::duplicate(format!(
                "Playlist '{new_name}' already exists"
            )));
        }

        let stored = inner.owned_mut(owner_id, id)?;
        stored.playlist.name = new_name.to_string();
        stored.playlist.updated_at = Utc::now();

        Ok(())
    }

    async fn delete_playlist(&self, owner_id: &UserId, id: &PlaylistId) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.owned_mut(owner_id, id)?;
        inner.playlists.remove(id);
        Ok(())
    }

    async fn add_song_to_playlist(
        &self,
        owner_id: &UserId,
        playlist_id: &PlaylistId,
        song: NewSong,
    ) -> Result<Song> {
        let mut inner = self.inner.write().await;
        let stored = inner.owned_mut(owner_id, playlist_id)?;

        if stored.songs.iter().any(|existing| song.matches(existing)) {
            return Err(PlaylistError::duplicate(format!(
                "Song '{}' by '{}' from '{}' is already in the playlist",
                song.track, song.artist, song.album
            )));
        }

        let position = stored.songs.last().map_or(0, |last| last.position + 1);
        let song = Song::new(playlist_id.clone(), song, position);
        stored.songs.push(song.clone());
        stored.playlist.updated_at = Utc::now();

        Ok(song)
    }

    async fn remove_song_from_playlist(
        &self,
        owner_id: &UserId,
        playlist_id: &PlaylistId,
        song_id: &SongId,
    ) -> Result<()> {
        let mut inner = self.inner.write().await;
        let stored = inner.owned_mut(owner_id, playlist_id)?;

        let index = stored
            .songs
            .iter()
            .position(|song| &song.id == song_id)
            .ok_or_else(|| PlaylistError::SongNotFound(song_id.clone()))?;
        stored.songs.remove(index);
        stored.playlist.updated_at = Utc::now();

        Ok(())
    }
}
