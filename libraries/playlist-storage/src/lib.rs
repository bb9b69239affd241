//! Playlist Storage
//!
//! `PlaylistStore` implementations for the playlist service.
//!
//! # Architecture
//!
//! - **SQLite**: `SqliteStore`, persistent, uniqueness enforced by table constraints
//! - **Memory**: `MemoryStore`, one lock over all maps, used for tests and ephemeral runs
//! - **Vertical Slicing**: Each SQLite feature owns its own queries
//!
//! # Example
//!
//! ```rust,no_run
//! use playlist_core::PlaylistStore;
//! use playlist_storage::{create_pool, run_migrations, SqliteStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://playlists.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteStore::new(pool);
//! let user = store.create_user().await?;
//! let playlist = store.create_playlist(&user.id, "Road Trip").await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod memory;

// Vertical slices
pub mod playlists;
pub mod songs;
pub mod users;

pub use context::SqliteStore;
pub use error::StorageError;
pub use memory::MemoryStore;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://playlists.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating SQLite pool for {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Begin a transaction holding the write lock from its first statement
///
/// A deferred transaction that reads before writing cannot upgrade its lock
/// once another writer has committed in WAL mode; it fails with
/// `SQLITE_BUSY` without waiting on the busy timeout.
pub(crate) async fn begin_write(
    pool: &SqlitePool,
) -> Result<sqlx::Transaction<'static, sqlx::Sqlite>, sqlx::Error> {
    pool.begin_with("BEGIN IMMEDIATE").await
}

/// Map a unique-constraint violation to `PlaylistError::Duplicate`
pub(crate) fn map_unique_violation(
    err: sqlx::Error,
    message: impl FnOnce() -> String,
) -> playlist_core::PlaylistError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            playlist_core::PlaylistError::duplicate(message())
        }
        _ => err.into(),
    }
}
