use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

use super::repo::Person;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/people", get(list_people))
        .route("/people/:people_id", get(get_person))
}

#[instrument(skip(state))]
pub async fn list_people(State(state): State<AppState>) -> Result<Json<Vec<Person>>, ApiError> {
    let people = Person::list(&state.db).await?;
    Ok(Json(people))
}

#[instrument(skip(state))]
pub async fn get_person(
    State(state): State<AppState>,
    Path(people_id): Path<i64>,
) -> Result<Json<Person>, ApiError> {
    let person = Person::find_by_id(&state.db, people_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("People not found".into()))?;
    Ok(Json(person))
}
