// handlers/favorites.rs - favorite planets and characters
//
// Two behaviours here are deliberate and covered by tests:
// - listing returns every favorite row in the store, not only the path user's
// - deleting removes the user's lowest-id favorite of that kind; the planet or
//   character id in the path only appears in the response message

use axum::extract::{rejection::JsonRejection, Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::database::models::{
    CharacterFavorite, CharacterFavoriteView, NewCharacterFavorite, NewPlanetFavorite, PlanetFavorite,
    PlanetFavoriteView,
};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, DATA_RETRIEVED};
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoritesView {
    pub favorite_planets: Vec<PlanetFavoriteView>,
    pub favorite_characters: Vec<CharacterFavoriteView>,
}

#[derive(Debug, Deserialize)]
pub struct AddPlanet {
    pub planet_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct AddCharacter {
    pub character_id: i64,
}

/// GET /users/:id/favorites
pub async fn list(State(state): State<AppState>, Path(_user_id): Path<i64>) -> ApiResult<FavoritesView> {
    let favorite_planets = state.db.planet_favorites().list_all().await?;
    let favorite_characters = state.db.character_favorites().list_all().await?;

    Ok(ApiResponse::results(
        FavoritesView {
            favorite_planets: favorite_planets.iter().map(PlanetFavorite::serialize).collect(),
            favorite_characters: favorite_characters.iter().map(CharacterFavorite::serialize).collect(),
        },
        DATA_RETRIEVED,
    ))
}

/// POST /favorites/:id/planet
pub async fn add_planet(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    payload: Result<Json<AddPlanet>, JsonRejection>,
) -> ApiResult<()> {
    let Json(body) = payload?;
    let favorite = state
        .db
        .planet_favorites()
        .insert(NewPlanetFavorite::new(user_id, body.planet_id))
        .await?;
    info!(favorite_id = favorite.id, user_id, planet_id = body.planet_id, "planet favorite added");
    Ok(ApiResponse::message(format!(
        "Planet {} added to favorites of {}",
        body.planet_id, user_id
    )))
}

/// POST /favorites/:id/character
pub async fn add_character(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    payload: Result<Json<AddCharacter>, JsonRejection>,
) -> ApiResult<()> {
    let Json(body) = payload?;
    let favorite = state
        .db
        .character_favorites()
        .insert(NewCharacterFavorite::new(user_id, body.character_id))
        .await?;
    info!(
        favorite_id = favorite.id,
        user_id,
        character_id = body.character_id,
        "character favorite added"
    );
    Ok(ApiResponse::message(format!(
        "Character {} added to favorites of {}",
        body.character_id, user_id
    )))
}

/// DELETE /favorites/:id/planet/:planet_id
pub async fn remove_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i64, i64)>,
) -> ApiResult<()> {
    if !state.db.planet_favorites().delete_first_for_user(user_id).await? {
        return Err(ApiError::not_found(format!("User {} has no favorite planets", user_id)));
    }
    info!(user_id, planet_id, "planet favorite removed");
    Ok(ApiResponse::message(format!(
        "Planet {} deleted from favorites of {}",
        planet_id, user_id
    )))
}

/// DELETE /favorites/:id/character/:character_id
pub async fn remove_character(
    State(state): State<AppState>,
    Path((user_id, character_id)): Path<(i64, i64)>,
) -> ApiResult<()> {
    if !state.db.character_favorites().delete_first_for_user(user_id).await? {
        return Err(ApiError::not_found(format!("User {} has no favorite characters", user_id)));
    }
    info!(user_id, character_id, "character favorite removed");
    Ok(ApiResponse::message(format!(
        "character {} deleted from favorites of {}",
        character_id, user_id
    )))
}
