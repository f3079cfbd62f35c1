use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::WarehouseItemModel;

pub async fn get(pool: &PgPool, wh_id: i64) -> AppResult<Option<WarehouseItemModel>> {
    let row = sqlx::query_as(
        "SELECT id, item_id, quantity FROM warehouse_items WHERE id = $1",
    )
    .bind(wh_id)
    .fetch_optional(pool)
    .await?;
    tracing::debug!(wh_id, found = row.is_some(), "loaded warehouse row");
    Ok(row)
}

pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> AppResult<Vec<WarehouseItemModel>> {
    let rows = sqlx::query_as(
        "SELECT id, item_id, quantity FROM warehouse_items ORDER BY id OFFSET $1 LIMIT $2",
    )
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn count(pool: &PgPool) -> AppResult<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM warehouse_items")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Inserts a stock row for `item_id`. The reference is not pre-checked; a
/// dangling `item_id` trips the foreign key and comes back as a
/// `ConstraintViolation`.
pub async fn create(
    pool: &PgPool,
    item_id: i64,
    quantity: i64,
) -> AppResult<WarehouseItemModel> {
    tracing::debug!(item_id, quantity, "inserting warehouse row");
    sqlx::query_as(
        "INSERT INTO warehouse_items (item_id, quantity) VALUES ($1, $2) \
         RETURNING id, item_id, quantity",
    )
    .bind(item_id)
    .bind(quantity)
    .fetch_one(pool)
    .await
    .map_err(AppError::from_db)
}

/// Writes back a patched row. Only `quantity` is mutable; `id` and
/// `item_id` never change after creation.
pub async fn update(pool: &PgPool, row: &WarehouseItemModel) -> AppResult<WarehouseItemModel> {
    tracing::debug!(wh_id = row.id, quantity = row.quantity, "updating warehouse row");
    sqlx::query_as(
        "UPDATE warehouse_items SET quantity = $1 WHERE id = $2 \
         RETURNING id, item_id, quantity",
    )
    .bind(row.quantity)
    .bind(row.id)
    .fetch_one(pool)
    .await
    .map_err(AppError::from_db)
}

/// Resolves the owner of the item a stock row points at, as one explicit
/// join over the warehouse → item chain.
pub async fn owner_of(pool: &PgPool, wh_id: i64) -> AppResult<Option<i64>> {
    let owner_id = sqlx::query_scalar(
        "SELECT i.owner_id FROM items i \
         JOIN warehouse_items w ON w.item_id = i.id \
         WHERE w.id = $1",
    )
    .bind(wh_id)
    .fetch_optional(pool)
    .await?;
    Ok(owner_id)
}
