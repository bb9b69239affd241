/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use playlist_core::PlaylistError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Playlist(#[from] PlaylistError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

impl From<playlist_storage::StorageError> for ServerError {
    fn from(err: playlist_storage::StorageError) -> Self {
        ServerError::Playlist(err.into())
    }
}

impl ServerError {
    /// Failure to sign a token is a server fault, unlike a rejected token
    pub fn token_signing(err: jsonwebtoken::errors::Error) -> Self {
        ServerError::Internal(format!("Failed to sign token: {err}"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Auth(_) | ServerError::Jwt(_) => StatusCode::UNAUTHORIZED,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Playlist(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            ServerError::Playlist(PlaylistError::Duplicate(_) | PlaylistError::InvalidInput(_)) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::Playlist(_) | ServerError::Internal(_) | ServerError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            ServerError::Auth(msg) | ServerError::NotFound(msg) | ServerError::BadRequest(msg) => {
                msg
            }
            ServerError::Playlist(ref e) if status != StatusCode::INTERNAL_SERVER_ERROR => {
                e.to_string()
            }
            ServerError::Playlist(ref e) => {
                tracing::error!("Storage error: {:?}", e);
                "Storage error".to_string()
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                "Configuration error".to_string()
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            ServerError::Jwt(ref e) => {
                tracing::warn!("JWT error: {:?}", e);
                "Invalid token".to_string()
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playlist_core::{PlaylistId, SongId};

    #[test]
    fn playlist_errors_map_to_client_statuses() {
        let cases = [
            (
                PlaylistError::PlaylistNotFound(PlaylistId::new("p")),
                StatusCode::NOT_FOUND,
            ),
            (PlaylistError::SongNotFound(SongId::new("s")), StatusCode::NOT_FOUND),
            (PlaylistError::duplicate("name"), StatusCode::BAD_REQUEST),
            (PlaylistError::invalid_input("blank"), StatusCode::BAD_REQUEST),
            (PlaylistError::storage("disk"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(ServerError::from(err).status(), expected);
        }
    }

    #[test]
    fn token_signing_failure_is_internal() {
        use jsonwebtoken::errors::ErrorKind;

        let signing = ServerError::token_signing(ErrorKind::InvalidKeyFormat.into());
        assert_eq!(signing.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let verification = ServerError::from(jsonwebtoken::errors::Error::from(
            ErrorKind::InvalidToken,
        ));
        assert_eq!(verification.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn auth_failures_are_unauthorized() {
        assert_eq!(
            ServerError::Auth("missing".to_string()).into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
