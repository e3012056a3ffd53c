use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::ApiError;
use crate::state::AppState;

use super::repo::User;

/// Resolves the acting user for favorite operations. There is no session or
/// token yet; the policy is "first user row by primary key". Swapping in real
/// authentication only means replacing this extractor.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = User::first(&state.db).await?.ok_or_else(|| {
            ApiError::NotFound("No users found. Create a user via the admin endpoint.".into())
        })?;
        Ok(CurrentUser(user))
    }
}
