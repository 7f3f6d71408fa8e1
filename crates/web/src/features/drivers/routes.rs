use axum::{Router, routing::get};

use super::handlers::{get_driver, list_drivers};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_drivers))
        .route("/:id", get(get_driver))
}
