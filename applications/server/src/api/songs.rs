/// Song-in-playlist API routes
use crate::{
    api::{
        payload::{required, Payload},
        playlists::authorize,
    },
    error::Result,
    middleware::AuthenticatedUser,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use playlist_core::{NewSong, PlaylistId, Song, SongId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct AddSongRequest {
    pub track: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SongResponse {
    pub song: Song,
}

/// PUT /api/playlist/:id/song
/// Add a song to a playlist
pub async fn add_song(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Payload(req): Payload<AddSongRequest>,
) -> Result<(StatusCode, Json<SongResponse>)> {
    let song = NewSong::new(
        required(req.track, "track")?,
        required(req.artist, "artist")?,
        required(req.album, "album")?,
    )?;

    let playlist_id = PlaylistId::new(id);
    authorize(&app_state, &auth, &playlist_id).await?;

    let song = app_state
        .store
        .add_song_to_playlist(auth.user_id(), &playlist_id, song)
        .await?;
    tracing::debug!("Added song {} to playlist {}", song.id, playlist_id);

    Ok((StatusCode::CREATED, Json(SongResponse { song })))
}

/// DELETE /api/playlist/:id/song/:song_id
/// Remove a song from a playlist
pub async fn remove_song(
    Path((id, song_id)): Path<(String, String)>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<StatusCode> {
    let playlist_id = PlaylistId::new(id);
    let song_id = SongId::new(song_id);
    authorize(&app_state, &auth, &playlist_id).await?;

    app_state
        .store
        .remove_song_from_playlist(auth.user_id(), &playlist_id, &song_id)
        .await?;
    tracing::debug!("Removed song {} from playlist {}", song_id, playlist_id);

    Ok(StatusCode::NO_CONTENT)
}
