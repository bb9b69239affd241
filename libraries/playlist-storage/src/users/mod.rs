//! User queries

use playlist_core::{error::Result, types::*};
use sqlx::{Row, SqlitePool};

/// Insert a new user with a generated ID
pub async fn create(pool: &SqlitePool) -> Result<User> {
    let user = User::new();

    sqlx::query("INSERT INTO users (id, created_at) VALUES (?, ?)")
        .bind(&user.id)
        .bind(user.created_at)
        .execute(pool)
        .await?;

    Ok(user)
}

/// Get user by ID
pub async fn get_by_id(pool: &SqlitePool, id: &UserId) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, created_at FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| User {
        id: row.get("id"),
        created_at: row.get("created_at"),
    }))
}
