use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::models::Driver;

use crate::{error::WebError, state::AppState};

use super::services;

#[utoipa::path(
    get,
    path = "/api/drivers",
    responses(
        (status = 200, description = "Driver standings", body = Vec<Driver>)
    ),
    tag = "drivers"
)]
pub async fn list_drivers(State(state): State<AppState>) -> Result<Response, WebError> {
    let dataset = state.current().await;

    Ok(Json(services::list_drivers(&dataset)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/drivers/{id}",
    params(
        ("id" = String, Path, description = "Three-letter driver code")
    ),
    responses(
        (status = 200, description = "Driver found", body = Driver),
        (status = 404, description = "Driver not found")
    ),
    tag = "drivers"
)]
pub async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let dataset = state.current().await;
    let driver = services::get_driver(&dataset, &id)?;

    Ok(Json(driver).into_response())
}
