use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::api::{AppState, Pagination};
use crate::db;
use crate::error::{AppError, AppResult};
use crate::middleware::CurrentUser;
use crate::models::{
    WarehouseItemCreate, WarehouseItemPublic, WarehouseItemUpdate, WarehouseItemsPublic,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_warehouse_items).put(update_warehouse_item))
        .route("/:item_id", post(create_warehouse_item))
}

async fn list_warehouse_items(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Query(page): Query<Pagination>,
) -> AppResult<Json<WarehouseItemsPublic>> {
    page.validate()?;

    let count = db::warehouse::count(&state.pool).await?;
    let rows = db::warehouse::list(&state.pool, page.skip, page.limit).await?;

    Ok(Json(WarehouseItemsPublic {
        data: rows.iter().map(WarehouseItemPublic::from).collect(),
        count,
    }))
}

/// `item_id` is deliberately not pre-checked; a dangling reference trips the
/// foreign key and surfaces as a 409 rather than a partial write.
async fn create_warehouse_item(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Path(item_id): Path<i64>,
    Json(body): Json<WarehouseItemCreate>,
) -> AppResult<Json<WarehouseItemPublic>> {
    let row = db::warehouse::create(&state.pool, item_id, body.quantity).await?;
    Ok(Json(WarehouseItemPublic::from(&row)))
}

#[derive(Debug, Deserialize)]
struct UpdateQuery {
    wh_id: i64,
}

async fn update_warehouse_item(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(query): Query<UpdateQuery>,
    Json(body): Json<WarehouseItemUpdate>,
) -> AppResult<Json<WarehouseItemPublic>> {
    let mut row = db::warehouse::get(&state.pool, query.wh_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("warehouse item {} not found", query.wh_id)))?;

    // Ownership lives two hops away: warehouse row -> item -> owner.
    let owner_id = db::warehouse::owner_of(&state.pool, query.wh_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("warehouse item {} not found", query.wh_id)))?;

    if !current_user.can_act_on(owner_id) {
        return Err(AppError::PermissionDenied(
            "only the item owner or a superuser may update stock".to_string(),
        ));
    }

    body.apply(&mut row);
    let row = db::warehouse::update(&state.pool, &row).await?;
    Ok(Json(WarehouseItemPublic::from(&row)))
}
