use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::SeasonDataset;

/// One race on the season timeline: finishing position per driver id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TimelinePoint {
    pub race: String,
    pub round: u32,
    pub positions: BTreeMap<String, u32>,
}

/// Projects race results onto the top `limit` drivers of the standings.
///
/// Drivers without a classified result in a race are simply absent from that
/// race's map.
pub fn build_timeline(dataset: &SeasonDataset, limit: usize) -> Vec<TimelinePoint> {
    let tracked: Vec<&str> = dataset
        .drivers
        .iter()
        .take(limit)
        .map(|d| d.id.as_str())
        .collect();

    dataset
        .season_results
        .iter()
        .map(|race| TimelinePoint {
            race: race.race.clone(),
            round: race.round,
            positions: race
                .results
                .iter()
                .filter(|entry| tracked.contains(&entry.driver_id.as_str()))
                .map(|entry| (entry.driver_id.clone(), entry.position))
                .collect(),
        })
        .collect()
}
