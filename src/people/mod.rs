mod handlers;
mod repo;

pub use repo::Person;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
