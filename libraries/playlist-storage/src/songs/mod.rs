//! Song-in-playlist queries
//!
//! Callers are expected to have resolved ownership; the mutating functions
//! re-check it inside their transaction.

use crate::{begin_write, map_unique_violation, playlists};
use playlist_core::{error::Result, types::*, PlaylistError};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

fn song_from_row(row: &SqliteRow) -> Song {
    Song {
        id: row.get("id"),
        playlist_id: row.get("playlist_id"),
        track: row.get("track"),
        artist: row.get("artist"),
        album: row.get("album"),
        position: row.get::<i64, _>("position") as u32,
        added_at: row.get("added_at"),
    }
}

/// Get a playlist's songs ordered by position
pub async fn get_by_playlist(pool: &SqlitePool, playlist_id: &PlaylistId) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        r#"
        SELECT id, playlist_id, track, artist, album, position, added_at
        FROM playlist_songs
        WHERE playlist_id = ?
        ORDER BY position
        "#,
    )
    .bind(playlist_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(song_from_row).collect())
}

/// Append a song to an owned playlist
pub async fn add(
    pool: &SqlitePool,
    playlist_id: &PlaylistId,
    owner_id: &UserId,
    new_song: NewSong,
) -> Result<Song> {
    let mut tx = begin_write(pool).await?;

    if !playlists::is_owned_by(&mut *tx, playlist_id, owner_id).await? {
        return Err(PlaylistError::PlaylistNotFound(playlist_id.clone()));
    }

    let next_position: i64 = sqlx::query(
        "SELECT COALESCE(MAX(position) + 1, 0) AS next_pos FROM playlist_songs WHERE playlist_id = ?",
    )
    .bind(playlist_id)
    .fetch_one(&mut *tx)
    .await?
    .get("next_pos");

    let song = Song::new(playlist_id.clone(), new_song, next_position as u32);

    sqlx::query(
        r#"
        INSERT INTO playlist_songs (id, playlist_id, track, artist, album, position, added_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&song.id)
    .bind(&song.playlist_id)
    .bind(&song.track)
    .bind(&song.artist)
    .bind(&song.album)
    .bind(next_position)
    .bind(song.added_at)
    .execute(&mut *tx)
    .await
    .map_err(|e| {
        map_unique_violation(e, || {
            format!(
                "Song '{}' by '{}' from '{}' is already in the playlist",
                song.track, song.artist, song.album
            )
        })
    })?;

    playlists::touch(&mut *tx, playlist_id).await?;
    tx.commit().await?;

    Ok(song)
}

/// Remove a song from an owned playlist
pub async fn remove(
    pool: &SqlitePool,
    playlist_id: &PlaylistId,
    owner_id: &UserId,
    song_id: &SongId,
) -> Result<()> {
    let mut tx = begin_write(pool).await?;

    if !playlists::is_owned_by(&mut *tx, playlist_id, owner_id).await? {
        return Err(PlaylistError::PlaylistNotFound(playlist_id.clone()));
    }

    let result = sqlx::query("DELETE FROM playlist_songs WHERE id = ? AND playlist_id = ?")
        .bind(song_id)
        .bind(playlist_id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(PlaylistError::SongNotFound(song_id.clone()));
    }

    playlists::touch(&mut *tx, playlist_id).await?;
    tx.commit().await?;

    Ok(())
}
