use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{DataOrigin, SeasonDataset};

/// Headline information about the dataset currently being served.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSummary {
    pub origin: DataOrigin,
    pub generated_at: DateTime<Utc>,
    pub driver_count: usize,
    pub constructor_count: usize,
    pub race_count: usize,
    pub completed_races: usize,
    pub leader: Option<String>,
}

impl From<&SeasonDataset> for SeasonSummary {
    fn from(dataset: &SeasonDataset) -> Self {
        Self {
            origin: dataset.origin,
            generated_at: dataset.generated_at,
            driver_count: dataset.drivers.len(),
            constructor_count: dataset.constructors.len(),
            race_count: dataset.season_results.len(),
            completed_races: dataset.completed_races(),
            leader: dataset
                .drivers
                .iter()
                .find(|d| d.position == 1)
                .map(|d| d.name.clone()),
        }
    }
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RaceFilter {
    #[validate(range(min = 1, message = "round must be >= 1"))]
    pub round: Option<u32>,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TimelineQuery {
    #[validate(range(min = 1, max = 20, message = "limit must be between 1 and 20"))]
    #[serde(default = "default_timeline_limit")]
    pub limit: usize,
}

fn default_timeline_limit() -> usize {
    10
}

/// Result of a refresh run.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub origin: DataOrigin,
    pub generated_at: DateTime<Utc>,
    pub persisted: bool,
}
