use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{info, instrument, warn};

use crate::error::ApiError;
use crate::people::Person;
use crate::planets::Planet;
use crate::state::AppState;
use crate::users::{User, UserView};

use super::dto::{CreatePersonRequest, CreatePlanetRequest, CreateUserRequest};
use super::services::{hash_password, is_valid_email};

/// Out-of-band creation surface. Users, people and planets enter the catalog
/// here, not through the public read API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/users", post(create_user))
        .route("/admin/people", post(create_person))
        .route("/admin/planets", post(create_planet))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(mut payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserView>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::BadRequest("Invalid email".into()));
    }
    if payload.password.len() < 8 {
        warn!("password too short");
        return Err(ApiError::BadRequest("Password too short".into()));
    }
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::Conflict("Email already registered".into()));
    }

    let hash = hash_password(&payload.password)?;
    let user = User::create(&state.db, &payload.email, &hash, payload.is_active).await?;
    info!(user_id = user.id, email = %user.email, "user created");
    Ok((StatusCode::CREATED, Json(UserView::from(user))))
}

#[instrument(skip(state, payload))]
pub async fn create_person(
    State(state): State<AppState>,
    Json(payload): Json<CreatePersonRequest>,
) -> Result<(StatusCode, Json<Person>), ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Name is required".into()));
    }
    let person = Person::create(
        &state.db,
        payload.name.trim(),
        payload.gender.as_deref(),
        payload.birth_year.as_deref(),
        payload.height.as_deref(),
    )
    .await?;
    info!(people_id = person.id, name = %person.name, "person created");
    Ok((StatusCode::CREATED, Json(person)))
}

#[instrument(skip(state, payload))]
pub async fn create_planet(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlanetRequest>,
) -> Result<(StatusCode, Json<Planet>), ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Name is required".into()));
    }
    let planet = Planet::create(
        &state.db,
        payload.name.trim(),
        payload.climate.as_deref(),
        payload.population.as_deref(),
    )
    .await?;
    info!(planet_id = planet.id, name = %planet.name, "planet created");
    Ok((StatusCode::CREATED, Json(planet)))
}
