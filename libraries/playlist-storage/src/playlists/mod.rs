use crate::{begin_write, map_unique_violation, songs};
use chrono::Utc;
use playlist_core::{error::Result, types::*, PlaylistError};
use sqlx::{sqlite::SqliteRow, Row, SqliteExecutor, SqlitePool};

fn playlist_from_row(row: &SqliteRow) -> Playlist {
    Playlist {
        id: row.get("id"),
        owner_id: row.get("owner_id"),
        name: row.get("name"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        songs: None,
    }
}

/// Check that a playlist exists and is owned by `owner_id`
pub async fn is_owned_by<'e>(
    executor: impl SqliteExecutor<'e>,
    id: &PlaylistId,
    owner_id: &UserId,
) -> Result<bool> {
    let row = sqlx::query("SELECT 1 FROM playlists WHERE id = ? AND owner_id = ?")
        .bind(id)
        .bind(owner_id)
        .fetch_optional(executor)
        .await?;

    Ok(row.is_some())
}

/// Get the owner's playlists in creation order
pub async fn get_user_playlists(pool: &SqlitePool, owner_id: &UserId) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(
        r#"
        SELECT id, owner_id, name, created_at, updated_at
        FROM playlists
        WHERE owner_id = ?
        ORDER BY created_at, rowid
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(playlist_from_row).collect())
}

/// Get an owned playlist by ID
pub async fn get_by_id(
    pool: &SqlitePool,
    id: &PlaylistId,
    owner_id: &UserId,
) -> Result<Option<Playlist>> {
    let row = sqlx::query(
        r#"
        SELECT id, owner_id, name, created_at, updated_at
        FROM playlists
        WHERE id = ? AND owner_id = ?
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(playlist_from_row))
}

/// Get an owned playlist with all its songs
pub async fn get_with_songs(
    pool: &SqlitePool,
    id: &PlaylistId,
    owner_id: &UserId,
) -> Result<Option<Playlist>> {
    let Some(playlist) = get_by_id(pool, id, owner_id).await? else {
        return Ok(None);
    };

    let songs = songs::get_by_playlist(pool, id).await?;
    Ok(Some(playlist.with_songs(songs)))
}

/// Create new playlist
pub async fn create(pool: &SqlitePool, owner_id: &UserId, name: &str) -> Result<Playlist> {
    let playlist = Playlist::new(owner_id.clone(), name);

    sqlx::query(
        r#"
        INSERT INTO playlists (id, owner_id, name, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&playlist.id)
    .bind(&playlist.owner_id)
    .bind(&playlist.name)
    .bind(playlist.created_at)
    .bind(playlist.updated_at)
    .execute(pool)
    .await
    .map_err(|e| map_unique_violation(e, || format!("Playlist '{name}' already exists")))?;

    Ok(playlist)
}

/// Rename an owned playlist
pub async fn rename(
    pool: &SqlitePool,
    id: &PlaylistId,
    owner_id: &UserId,
    new_name: &str,
) -> Result<()> {
    let result = sqlx::query(
        "UPDATE playlists SET name = ?, updated_at = ? WHERE id = ? AND owner_id = ?",
    )
    .bind(new_name)
    .bind(Utc::now())
    .bind(id)
    .bind(owner_id)
    .execute(pool)
    .await
    .map_err(|e| map_unique_violation(e, || format!("Playlist '{new_name}' already exists")))?;

    if result.rows_affected() == 0 {
        return Err(PlaylistError::PlaylistNotFound(id.clone()));
    }

    Ok(())
}

/// Delete an owned playlist and its songs
pub async fn delete(pool: &SqlitePool, id: &PlaylistId, owner_id: &UserId) -> Result<()> {
    let mut tx = begin_write(pool).await?;

    if !is_owned_by(&mut *tx, id, owner_id).await? {
        return Err(PlaylistError::PlaylistNotFound(id.clone()));
    }

    sqlx::query("DELETE FROM playlist_songs WHERE playlist_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(())
}

/// Bump `updated_at` after a song change
pub(crate) async fn touch<'e>(executor: impl SqliteExecutor<'e>, id: &PlaylistId) -> Result<()> {
    sqlx::query("UPDATE playlists SET updated_at = ? WHERE id = ?")
        .bind(Utc::now())
        .bind(id)
        .execute(executor)
        .await?;

    Ok(())
}
