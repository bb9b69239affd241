/// Authentication API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use playlist_core::UserId;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AuthenticationResponse {
    pub token: String,
    pub user_id: UserId,
}

/// POST /api/users/authentication
/// Create a fresh user and issue its session token
pub async fn authenticate(State(app_state): State<AppState>) -> Result<Json<AuthenticationResponse>> {
    let user = app_state.store.create_user().await?;
    let token = app_state.auth_service.create_access_token(&user.id)?;
    tracing::info!("Issued token for new user {}", user.id);

    Ok(Json(AuthenticationResponse {
        token,
        user_id: user.id,
    }))
}
