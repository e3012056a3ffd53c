use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{info, instrument, warn};

use crate::error::ApiError;
use crate::people::Person;
use crate::planets::Planet;
use crate::state::AppState;
use crate::users::extractors::CurrentUser;

use super::dto::{FavoriteAdded, FavoriteRemoved, FavoriteView};
use super::repo::Favorite;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/favorites", get(list_favorites))
        .route(
            "/favorite/planet/:planet_id",
            post(add_favorite_planet).delete(remove_favorite_planet),
        )
        .route(
            "/favorite/people/:people_id",
            post(add_favorite_person).delete(remove_favorite_person),
        )
}

#[instrument(skip(state, user))]
pub async fn list_favorites(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<FavoriteView>>, ApiError> {
    let favs = Favorite::list_by_user(&state.db, user.id).await?;
    let mut views = Vec::with_capacity(favs.len());
    for fav in &favs {
        views.push(FavoriteView::resolve(&state.db, fav).await?);
    }
    Ok(Json(views))
}

#[instrument(skip(state, user))]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(planet_id): Path<i64>,
) -> Result<(StatusCode, Json<FavoriteAdded>), ApiError> {
    if Planet::find_by_id(&state.db, planet_id).await?.is_none() {
        return Err(ApiError::NotFound("Planet not found".into()));
    }
    if Favorite::find_by_planet(&state.db, user.id, planet_id)
        .await?
        .is_some()
    {
        warn!(user_id = user.id, planet_id, "favorite already exists");
        return Err(ApiError::BadRequest("Favorite already exists".into()));
    }

    let fav = Favorite::insert_planet(&state.db, user.id, planet_id)
        .await
        .map_err(duplicate_or_internal)?;
    info!(user_id = user.id, planet_id, "planet added to favorites");

    let view = FavoriteView::resolve(&state.db, &fav).await?;
    Ok((
        StatusCode::CREATED,
        Json(FavoriteAdded {
            msg: "Planet added to favorites".into(),
            favorite: view,
        }),
    ))
}

#[instrument(skip(state, user))]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(people_id): Path<i64>,
) -> Result<(StatusCode, Json<FavoriteAdded>), ApiError> {
    if Person::find_by_id(&state.db, people_id).await?.is_none() {
        return Err(ApiError::NotFound("People not found".into()));
    }
    if Favorite::find_by_person(&state.db, user.id, people_id)
        .await?
        .is_some()
    {
        warn!(user_id = user.id, people_id, "favorite already exists");
        return Err(ApiError::BadRequest("Favorite already exists".into()));
    }

    let fav = Favorite::insert_person(&state.db, user.id, people_id)
        .await
        .map_err(duplicate_or_internal)?;
    info!(user_id = user.id, people_id, "people added to favorites");

    let view = FavoriteView::resolve(&state.db, &fav).await?;
    Ok((
        StatusCode::CREATED,
        Json(FavoriteAdded {
            msg: "People added to favorites".into(),
            favorite: view,
        }),
    ))
}

#[instrument(skip(state, user))]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(planet_id): Path<i64>,
) -> Result<Json<FavoriteRemoved>, ApiError> {
    let fav = Favorite::find_by_planet(&state.db, user.id, planet_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Favorite not found".into()))?;
    Favorite::delete(&state.db, fav.id).await?;
    info!(user_id = user.id, planet_id, "favorite planet removed");
    Ok(Json(FavoriteRemoved {
        msg: "Favorite planet removed".into(),
    }))
}

#[instrument(skip(state, user))]
pub async fn remove_favorite_person(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(people_id): Path<i64>,
) -> Result<Json<FavoriteRemoved>, ApiError> {
    let fav = Favorite::find_by_person(&state.db, user.id, people_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Favorite not found".into()))?;
    Favorite::delete(&state.db, fav.id).await?;
    info!(user_id = user.id, people_id, "favorite people removed");
    Ok(Json(FavoriteRemoved {
        msg: "Favorite people removed".into(),
    }))
}

/// The pre-insert lookup only buys a friendlier message; the partial unique
/// indexes close the check-then-insert race, so a violation here still maps
/// to the duplicate fault.
fn duplicate_or_internal(e: sqlx::Error) -> ApiError {
    let unique = e
        .as_database_error()
        .map(|d| d.is_unique_violation())
        .unwrap_or(false);
    if unique {
        ApiError::BadRequest("Favorite already exists".into())
    } else {
        ApiError::Internal(e.into())
    }
}
