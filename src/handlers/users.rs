use axum::extract::{rejection::JsonRejection, Path, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::database::models::{NewUser, User, UserView};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, DATA_RETRIEVED, SUCCESSFUL};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ReplaceUser {
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

/// GET /users
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<UserView>> {
    let users = state.db.users().list_all().await?;
    Ok(ApiResponse::results(users.iter().map(User::serialize).collect(), DATA_RETRIEVED))
}

/// POST /users - new accounts always start active
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateUser>, JsonRejection>,
) -> ApiResult<()> {
    let Json(body) = payload?;
    let user = state
        .db
        .users()
        .insert(NewUser::new(body.email, body.password, true))
        .await?;
    info!(user_id = user.id, "user created");
    Ok(ApiResponse::message("User created successfully!"))
}

/// GET /users/:id
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<UserView> {
    let user = state
        .db
        .users()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", id)))?;
    Ok(ApiResponse::results(user.serialize(), SUCCESSFUL))
}

/// PUT /users/:id
///
/// Inserts a brand new user from the body. The row at `:id` is not touched and
/// `:id` does not have to exist; this is the published contract of the route.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<ReplaceUser>, JsonRejection>,
) -> ApiResult<()> {
    let Json(body) = payload?;
    let user = state
        .db
        .users()
        .insert(NewUser::new(body.email, body.password, body.is_active))
        .await?;
    info!(path_id = id, user_id = user.id, "user inserted through PUT");
    Ok(ApiResponse::message(SUCCESSFUL))
}

/// DELETE /users/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<()> {
    if !state.db.users().delete(id).await? {
        return Err(ApiError::not_found(format!("User {} not found", id)));
    }
    info!(user_id = id, "user deleted");
    Ok(ApiResponse::message(SUCCESSFUL))
}
