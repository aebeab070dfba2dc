use axum::extract::{Path, State};

use crate::database::models::{Planet, PlanetView};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, DATA_RETRIEVED, SUCCESSFUL};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<PlanetView>> {
    let planets = state.db.planets().list_all().await?;
    Ok(ApiResponse::results(planets.iter().map(Planet::serialize).collect(), DATA_RETRIEVED))
}

pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<PlanetView> {
    match state.db.planets().get_by_id(id).await? {
        Some(planet) => Ok(ApiResponse::results(planet.serialize(), SUCCESSFUL)),
        None => Err(ApiError::not_found(format!("Planet {} not found", id))),
    }
}
