mod dto;
mod handlers;
mod repo;

pub use dto::FavoriteView;
pub use repo::Favorite;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
