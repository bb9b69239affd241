/// Playlists API routes
use crate::{
    api::payload::{required, Payload},
    error::{Result, ServerError},
    middleware::AuthenticatedUser,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use playlist_core::{validate_playlist_name, Playlist, PlaylistId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePlaylistRequest {
    #[serde(rename = "newName")]
    pub new_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PlaylistListResponse {
    pub playlist: Vec<Playlist>,
}

/// `playlist` is `null` when the id is unknown to the caller
#[derive(Debug, Serialize)]
pub struct PlaylistResponse {
    pub playlist: Option<Playlist>,
}

/// Single ownership check used before every playlist or song mutation
pub(crate) async fn authorize(
    app_state: &AppState,
    auth: &AuthenticatedUser,
    playlist_id: &PlaylistId,
) -> Result<()> {
    if app_state
        .store
        .can_access(auth.user_id(), playlist_id)
        .await?
    {
        Ok(())
    } else {
        Err(ServerError::NotFound("Playlist not found".to_string()))
    }
}

/// GET /api/playlist
/// Get all playlists owned by the authenticated user
pub async fn list_playlists(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<PlaylistListResponse>> {
    let playlists = app_state
        .store
        .get_user_playlists(auth.user_id())
        .await?;
    Ok(Json(PlaylistListResponse {
        playlist: playlists,
    }))
}

/// POST /api/playlist
/// Create a new playlist
pub async fn create_playlist(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Payload(req): Payload<CreatePlaylistRequest>,
) -> Result<(StatusCode, Json<PlaylistResponse>)> {
    let name = required(req.name, "name")?;
    validate_playlist_name(&name)?;

    let playlist = app_state
        .store
        .create_playlist(auth.user_id(), &name)
        .await?;
    tracing::info!("User {} created playlist {}", auth.user_id(), playlist.id);

    Ok((
        StatusCode::CREATED,
        Json(PlaylistResponse {
            playlist: Some(playlist),
        }),
    ))
}

/// GET /api/playlist/:id
/// Get playlist details with songs
///
/// Unknown and foreign ids answer 200 with a null playlist, unlike the
/// mutating routes which answer 404.
pub async fn get_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<PlaylistResponse>> {
    let playlist_id = PlaylistId::new(id);
    let playlist = app_state
        .store
        .get_playlist_with_songs(auth.user_id(), &playlist_id)
        .await?;

    Ok(Json(PlaylistResponse { playlist }))
}

/// PUT /api/playlist/:id
/// Rename a playlist
pub async fn update_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Payload(req): Payload<UpdatePlaylistRequest>,
) -> Result<StatusCode> {
    let new_name = required(req.new_name, "newName")?;
    validate_playlist_name(&new_name)?;

    let playlist_id = PlaylistId::new(id);
    authorize(&app_state, &auth, &playlist_id).await?;

    app_state
        .store
        .rename_playlist(auth.user_id(), &playlist_id, &new_name)
        .await?;
    tracing::debug!("Renamed playlist {}", playlist_id);

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/playlist/:id
/// Delete a playlist and its songs
pub async fn delete_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<StatusCode> {
    let playlist_id = PlaylistId::new(id);
    authorize(&app_state, &auth, &playlist_id).await?;

    app_state
        .store
        .delete_playlist(auth.user_id(), &playlist_id)
        .await?;
    tracing::info!("User {} deleted playlist {}", auth.user_id(), playlist_id);

    Ok(StatusCode::NO_CONTENT)
}
