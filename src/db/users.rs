use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::UserModel;

pub async fn get(pool: &PgPool, user_id: i64) -> AppResult<Option<UserModel>> {
    let user = sqlx::query_as(
        "SELECT id, email, full_name, hashed_password, is_active, is_superuser \
         FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> AppResult<Vec<UserModel>> {
    let users = sqlx::query_as(
        "SELECT id, email, full_name, hashed_password, is_active, is_superuser \
         FROM users ORDER BY id OFFSET $1 LIMIT $2",
    )
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(users)
}

pub async fn count(pool: &PgPool) -> AppResult<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Persists a patched row. The caller loads the row and applies the patch;
/// all mutable columns are written back.
pub async fn update(pool: &PgPool, user: &UserModel) -> AppResult<UserModel> {
    tracing::debug!(user_id = user.id, "updating user row");
    sqlx::query_as(
        "UPDATE users SET email = $1, full_name = $2, is_active = $3, is_superuser = $4 \
         WHERE id = $5 \
         RETURNING id, email, full_name, hashed_password, is_active, is_superuser",
    )
    .bind(&user.email)
    .bind(&user.full_name)
    .bind(user.is_active)
    .bind(user.is_superuser)
    .bind(user.id)
    .fetch_one(pool)
    .await
    .map_err(AppError::from_db)
}
