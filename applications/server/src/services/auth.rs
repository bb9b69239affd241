/// Authentication service - token issuance and resolution
use crate::error::{Result, ServerError};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use playlist_core::{PlaylistStore, User, UserId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Signs and verifies session tokens
#[derive(Debug, Clone)]
pub struct AuthService {
    secret: String,
    token_expiration: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    pub exp: i64,    // Expiration time
    pub iat: i64,    // Issued at
}

impl AuthService {
    pub fn new(secret: String, expiration_hours: u64) -> Self {
        Self {
            secret,
            token_expiration: Duration::hours(expiration_hours as i64),
        }
    }

    /// Create a session token for a user
    pub fn create_access_token(&self, user_id: &UserId) -> Result<String> {
        let now = Utc::now();
        let exp = now + self.token_expiration;

        let claims = Claims {
            sub: user_id.as_str().to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::default(), &claims, &encoding_key).map_err(ServerError::token_signing)
    }

    /// Verify signature and expiry, returning the token's user
    pub fn verify_access_token(&self, token: &str) -> Result<UserId> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &decoding_key, &validation)?;
        Ok(UserId::new(token_data.claims.sub))
    }
}

/// Resolves a request credential to the user it identifies
///
/// `Ok(None)` means the token is not recognized; errors are reserved for
/// failures of the lookup itself.
#[async_trait]
pub trait TokenResolver: Send + Sync {
    async fn resolve_token(&self, token: &str) -> Result<Option<User>>;
}

/// Accepts tokens signed by `AuthService` whose user still exists in the store
pub struct SessionResolver {
    auth_service: Arc<AuthService>,
    store: Arc<dyn PlaylistStore>,
}

impl SessionResolver {
    pub fn new(auth_service: Arc<AuthService>, store: Arc<dyn PlaylistStore>) -> Self {
        Self {
            auth_service,
            store,
        }
    }
}

#[async_trait]
impl TokenResolver for SessionResolver {
    async fn resolve_token(&self, token: &str) -> Result<Option<User>> {
        let user_id = match self.auth_service.verify_access_token(token) {
            Ok(user_id) => user_id,
            Err(e) => {
                tracing::warn!("Token verification failed: {}", e);
                return Ok(None);
            }
        };

        let user = self.store.get_user(&user_id).await?;
        if user.is_none() {
            tracing::warn!("Token refers to unknown user {}", user_id);
        }
        Ok(user)
    }
}
