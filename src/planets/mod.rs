mod handlers;
mod repo;

pub use repo::Planet;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
