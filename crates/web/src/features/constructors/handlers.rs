use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::models::Constructor;

use crate::{error::WebError, state::AppState};

use super::services;

#[utoipa::path(
    get,
    path = "/api/constructors",
    responses(
        (status = 200, description = "Constructor standings", body = Vec<Constructor>)
    ),
    tag = "constructors"
)]
pub async fn list_constructors(State(state): State<AppState>) -> Result<Response, WebError> {
    let dataset = state.current().await;

    Ok(Json(services::list_constructors(&dataset)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/constructors/{id}",
    params(
        ("id" = String, Path, description = "Constructor code")
    ),
    responses(
        (status = 200, description = "Constructor found", body = Constructor),
        (status = 404, description = "Constructor not found")
    ),
    tag = "constructors"
)]
pub async fn get_constructor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let dataset = state.current().await;
    let constructor = services::get_constructor(&dataset, &id)?;

    Ok(Json(constructor).into_response())
}
