use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    dto::{
        season::{RaceFilter, RefreshResponse, SeasonSummary, TimelineQuery},
        timeline::TimelinePoint,
    },
    models::RaceResult,
};
use validator::Validate;

use crate::{error::WebError, state::AppState};

use super::services;

#[utoipa::path(
    get,
    path = "/api/season",
    responses(
        (status = 200, description = "Summary of the dataset being served", body = SeasonSummary)
    ),
    tag = "season"
)]
pub async fn get_summary(State(state): State<AppState>) -> Result<Response, WebError> {
    let dataset = state.current().await;

    Ok(Json(services::get_summary(&dataset)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/season/results",
    params(RaceFilter),
    responses(
        (status = 200, description = "Race results, optionally a single round", body = Vec<RaceResult>),
        (status = 400, description = "Invalid round"),
        (status = 404, description = "Round not found")
    ),
    tag = "season"
)]
pub async fn get_results(
    State(state): State<AppState>,
    Query(filter): Query<RaceFilter>,
) -> Result<Response, WebError> {
    filter.validate()?;

    let dataset = state.current().await;
    let races = services::get_results(&dataset, filter.round)?;

    Ok(Json(races).into_response())
}

#[utoipa::path(
    get,
    path = "/api/season/timeline",
    params(TimelineQuery),
    responses(
        (status = 200, description = "Finishing positions of the top drivers per race", body = Vec<TimelinePoint>),
        (status = 400, description = "Invalid limit")
    ),
    tag = "season"
)]
pub async fn get_timeline(
    State(state): State<AppState>,
    Query(query): Query<TimelineQuery>,
) -> Result<Response, WebError> {
    query.validate()?;

    let dataset = state.current().await;

    Ok(Json(services::get_timeline(&dataset, query.limit)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/season/refresh",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Season data collected and swapped in", body = RefreshResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "season"
)]
pub async fn refresh_season(State(state): State<AppState>) -> Result<Response, WebError> {
    let response = state.refresh().await;

    Ok(Json(response).into_response())
}
