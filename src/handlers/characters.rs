use axum::extract::{Path, State};

use crate::database::models::{Character, CharacterView};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, DATA_RETRIEVED, SUCCESSFUL};
use crate::state::AppState;

/// GET /characters
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<CharacterView>> {
    let characters = state.db.characters().list_all().await?;
    Ok(ApiResponse::results(
        characters.iter().map(Character::serialize).collect(),
        DATA_RETRIEVED,
    ))
}

/// GET /characters/:id
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<CharacterView> {
    let character = state
        .db
        .characters()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Character {} not found", id)))?;
    Ok(ApiResponse::results(character.serialize(), SUCCESSFUL))
}
