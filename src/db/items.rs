use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{ItemCreate, ItemModel};

pub async fn get(pool: &PgPool, item_id: i64) -> AppResult<Option<ItemModel>> {
    let item = sqlx::query_as(
        "SELECT id, title, description, wholesale_price, retail_price, owner_id \
         FROM items WHERE id = $1",
    )
    .bind(item_id)
    .fetch_optional(pool)
    .await?;
    Ok(item)
}

pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> AppResult<Vec<ItemModel>> {
    let items = sqlx::query_as(
        "SELECT id, title, description, wholesale_price, retail_price, owner_id \
         FROM items ORDER BY id OFFSET $1 LIMIT $2",
    )
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn list_by_owner(
    pool: &PgPool,
    owner_id: i64,
    skip: i64,
    limit: i64,
) -> AppResult<Vec<ItemModel>> {
    let items = sqlx::query_as(
        "SELECT id, title, description, wholesale_price, retail_price, owner_id \
         FROM items WHERE owner_id = $1 ORDER BY id OFFSET $2 LIMIT $3",
    )
    .bind(owner_id)
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn count(pool: &PgPool) -> AppResult<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM items")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn count_by_owner(pool: &PgPool, owner_id: i64) -> AppResult<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM items WHERE owner_id = $1")
        .bind(owner_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn create(pool: &PgPool, owner_id: i64, item: &ItemCreate) -> AppResult<ItemModel> {
    tracing::debug!(owner_id, title = %item.title, "inserting item row");
    sqlx::query_as(
        "INSERT INTO items (title, description, wholesale_price, retail_price, owner_id) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING id, title, description, wholesale_price, retail_price, owner_id",
    )
    .bind(&item.title)
    .bind(&item.description)
    .bind(item.wholesale_price)
    .bind(item.retail_price)
    .bind(owner_id)
    .fetch_one(pool)
    .await
    .map_err(AppError::from_db)
}

pub async fn update(pool: &PgPool, item: &ItemModel) -> AppResult<ItemModel> {
    tracing::debug!(item_id = item.id, "updating item row");
    sqlx::query_as(
        "UPDATE items SET title = $1, description = $2, wholesale_price = $3, retail_price = $4 \
         WHERE id = $5 \
         RETURNING id, title, description, wholesale_price, retail_price, owner_id",
    )
    .bind(&item.title)
    .bind(&item.description)
    .bind(item.wholesale_price)
    .bind(item.retail_price)
    .bind(item.id)
    .fetch_one(pool)
    .await
    .map_err(AppError::from_db)
}
