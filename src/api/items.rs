use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::{AppState, Pagination};
use crate::db;
use crate::error::{AppError, AppResult};
use crate::middleware::CurrentUser;
use crate::models::{ItemCreate, ItemPublic, ItemUpdate, ItemsPublic};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:item_id", get(read_item).put(update_item))
}

/// Superusers page through everything; everyone else sees their own items.
async fn list_items(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(page): Query<Pagination>,
) -> AppResult<Json<ItemsPublic>> {
    page.validate()?;

    let (items, count) = if current_user.is_superuser() {
        (
            db::items::list(&state.pool, page.skip, page.limit).await?,
            db::items::count(&state.pool).await?,
        )
    } else {
        (
            db::items::list_by_owner(&state.pool, current_user.id(), page.skip, page.limit)
                .await?,
            db::items::count_by_owner(&state.pool, current_user.id()).await?,
        )
    };

    Ok(Json(ItemsPublic {
        data: items.iter().map(ItemPublic::from).collect(),
        count,
    }))
}

async fn read_item(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(item_id): Path<i64>,
) -> AppResult<Json<ItemPublic>> {
    let item = db::items::get(&state.pool, item_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("item {item_id} not found")))?;

    if !current_user.can_act_on(item.owner_id) {
        return Err(AppError::PermissionDenied(
            "only the owner or a superuser may read this item".to_string(),
        ));
    }

    Ok(Json(ItemPublic::from(&item)))
}

async fn create_item(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(body): Json<ItemCreate>,
) -> AppResult<Json<ItemPublic>> {
    let item = db::items::create(&state.pool, current_user.id(), &body).await?;
    Ok(Json(ItemPublic::from(&item)))
}

async fn update_item(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(item_id): Path<i64>,
    Json(body): Json<ItemUpdate>,
) -> AppResult<Json<ItemPublic>> {
    let mut item = db::items::get(&state.pool, item_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("item {item_id} not found")))?;

    if !current_user.can_act_on(item.owner_id) {
        return Err(AppError::PermissionDenied(
            "only the owner or a superuser may update this item".to_string(),
        ));
    }

    body.apply(&mut item);
    let item = db::items::update(&state.pool, &item).await?;
    Ok(Json(ItemPublic::from(&item)))
}
