use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

use super::dto::UserView;
use super::repo::User;

pub fn routes() -> Router<AppState> {
    Router::new().route("/users", get(list_users))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserView>>, ApiError> {
    let users = User::list(&state.db).await?;
    Ok(Json(users.into_iter().map(UserView::from).collect()))
}
