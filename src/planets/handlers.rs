use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

use super::repo::Planet;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/planets", get(list_planets))
        .route("/planets/:planet_id", get(get_planet))
}

#[instrument(skip(state))]
pub async fn list_planets(State(state): State<AppState>) -> Result<Json<Vec<Planet>>, ApiError> {
    let planets = Planet::list(&state.db).await?;
    Ok(Json(planets))
}

#[instrument(skip(state))]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i64>,
) -> Result<Json<Planet>, ApiError> {
    let planet = Planet::find_by_id(&state.db, planet_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Planet not found".into()))?;
    Ok(Json(planet))
}
