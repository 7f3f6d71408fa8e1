use axum::{Router, routing::get};

use super::handlers::{get_constructor, list_constructors};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_constructors))
        .route("/:id", get(get_constructor))
}
