/// Authentication middleware
use crate::{error::ServerError, state::AppState};
use axum::{
    extract::{FromRequestParts, Query, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use playlist_core::{User, UserId};
use serde::Deserialize;

/// Header (and query parameter) carrying the session token
pub const TOKEN_HEADER: &str = "token";

/// Extension type to store the authenticated user in the request
/// Can be used as an extractor in handlers
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl AuthenticatedUser {
    pub fn user_id(&self) -> &UserId {
        &self.0.id
    }
}

#[derive(Debug, Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// Middleware that resolves the `token` header (or `?token=`) to a user
///
/// Missing and unrecognized tokens are both rejected with 401 before any
/// handler runs.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let token = extract_token(&request)
        .ok_or_else(|| ServerError::Auth("Missing authentication token".to_string()))?;

    let user = app_state
        .tokens
        .resolve_token(&token)
        .await?
        .ok_or_else(|| ServerError::Auth("Invalid authentication token".to_string()))?;

    tracing::debug!("Authenticated user {}", user.id);
    request.extensions_mut().insert(AuthenticatedUser(user));

    Ok(next.run(request).await)
}

fn extract_token(request: &Request) -> Option<String> {
    let from_header = request
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);

    from_header
        .or_else(|| {
            Query::<TokenQuery>::try_from_uri(request.uri())
                .ok()
                .and_then(|Query(query)| query.token)
        })
        .filter(|token| !token.is_empty())
}

/// Implement FromRequestParts so AuthenticatedUser can be used as an extractor
#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| ServerError::Auth("Not authenticated".to_string()))
    }
}
