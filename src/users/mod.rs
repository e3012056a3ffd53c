mod dto;
pub(crate) mod extractors;
mod handlers;
mod repo;

pub use dto::UserView;
pub use repo::User;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
