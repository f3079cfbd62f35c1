use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::api::{AppState, Pagination};
use crate::db;
use crate::error::{AppError, AppResult};
use crate::middleware::CurrentUser;
use crate::models::{UserPublic, UserUpdate, UserUpdateMe, UsersPublic};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/me", get(read_user_me).patch(update_user_me))
        .route("/:user_id", get(read_user).patch(update_user))
}

async fn list_users(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(page): Query<Pagination>,
) -> AppResult<Json<UsersPublic>> {
    if !current_user.is_superuser() {
        return Err(AppError::PermissionDenied(
            "listing users requires superuser privileges".to_string(),
        ));
    }
    page.validate()?;

    let count = db::users::count(&state.pool).await?;
    let users = db::users::list(&state.pool, page.skip, page.limit).await?;

    Ok(Json(UsersPublic {
        data: users.iter().map(UserPublic::from).collect(),
        count,
    }))
}

async fn read_user_me(current_user: CurrentUser) -> Json<UserPublic> {
    Json(UserPublic::from(&current_user.0))
}

async fn update_user_me(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(body): Json<UserUpdateMe>,
) -> AppResult<Json<UserPublic>> {
    let mut user = current_user.0;
    body.apply(&mut user);
    let user = db::users::update(&state.pool, &user).await?;
    Ok(Json(UserPublic::from(&user)))
}

async fn read_user(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<i64>,
) -> AppResult<Json<UserPublic>> {
    if user_id != current_user.id() && !current_user.is_superuser() {
        return Err(AppError::PermissionDenied(
            "reading other users requires superuser privileges".to_string(),
        ));
    }

    let user = db::users::get(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {user_id} not found")))?;

    Ok(Json(UserPublic::from(&user)))
}

async fn update_user(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<i64>,
    Json(body): Json<UserUpdate>,
) -> AppResult<Json<UserPublic>> {
    if !current_user.is_superuser() {
        return Err(AppError::PermissionDenied(
            "updating users requires superuser privileges".to_string(),
        ));
    }

    let mut user = db::users::get(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {user_id} not found")))?;

    body.apply(&mut user);
    let user = db::users::update(&state.pool, &user).await?;
    Ok(Json(UserPublic::from(&user)))
}
