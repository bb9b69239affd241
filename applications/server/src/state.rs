/// Shared application state
use crate::{
    config::{StorageBackend, StorageSettings},
    error::Result,
    services::{AuthService, SessionResolver, TokenResolver},
};
use playlist_core::PlaylistStore;
use playlist_storage::{MemoryStore, SqliteStore};
use std::{path::Path, sync::Arc};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PlaylistStore>,
    pub auth_service: Arc<AuthService>,
    pub tokens: Arc<dyn TokenResolver>,
}

impl AppState {
    /// State whose tokens are resolved by `SessionResolver`
    pub fn new(store: Arc<dyn PlaylistStore>, auth_service: Arc<AuthService>) -> Self {
        let tokens = Arc::new(SessionResolver::new(
            Arc::clone(&auth_service),
            Arc::clone(&store),
        ));

        Self {
            store,
            auth_service,
            tokens,
        }
    }

    /// Replace the token resolver
    pub fn with_token_resolver(mut self, tokens: Arc<dyn TokenResolver>) -> Self {
        self.tokens = tokens;
        self
    }
}

/// Open the store selected by configuration
pub async fn open_store(settings: &StorageSettings) -> Result<Arc<dyn PlaylistStore>> {
    match settings.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on shutdown");
            Ok(Arc::new(MemoryStore::new()))
        }
        StorageBackend::Sqlite => {
            if let Some(parent) = settings
                .database_url
                .strip_prefix("sqlite://")
                .and_then(|path| Path::new(path).parent())
                .filter(|parent| !parent.as_os_str().is_empty())
            {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| crate::error::ServerError::Internal(e.to_string()))?;
            }

            let pool = playlist_storage::create_pool(&settings.database_url).await?;
            playlist_storage::run_migrations(&pool).await?;
            tracing::info!("Database connected");

            Ok(Arc::new(SqliteStore::new(pool)))
        }
    }
}
