use storage::{
    dto::{
        season::SeasonSummary,
        timeline::{TimelinePoint, build_timeline},
    },
    models::{RaceResult, SeasonDataset},
};

use crate::error::WebError;

pub fn get_summary(dataset: &SeasonDataset) -> SeasonSummary {
    SeasonSummary::from(dataset)
}

/// All races, or the single race for `round`
pub fn get_results(
    dataset: &SeasonDataset,
    round: Option<u32>,
) -> Result<Vec<RaceResult>, WebError> {
    match round {
        Some(round) => dataset
            .find_race(round)
            .map(|race| vec![race.clone()])
            .ok_or(WebError::RoundNotFound(round)),
        None => Ok(dataset.season_results.clone()),
    }
}

pub fn get_timeline(dataset: &SeasonDataset, limit: usize) -> Vec<TimelinePoint> {
    build_timeline(dataset, limit)
}
