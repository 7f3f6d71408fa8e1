use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntry {
    pub driver_id: String,
    pub position: u32,
}

impl ResultEntry {
    pub fn new(driver_id: impl Into<String>, position: u32) -> Self {
        Self {
            driver_id: driver_id.into(),
            position,
        }
    }
}

/// Finishing order of a single grand prix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RaceResult {
    pub race: String,
    pub round: u32,
    /// ISO date when the source provides one, otherwise the source's own text.
    pub date: String,
    pub results: Vec<ResultEntry>,
}

impl RaceResult {
    pub fn new(race: impl Into<String>, round: u32, date: impl Into<String>) -> Self {
        Self {
            race: race.into(),
            round,
            date: date.into(),
            results: Vec::new(),
        }
    }

    pub fn position_of(&self, driver_id: &str) -> Option<u32> {
        self.results
            .iter()
            .find(|entry| entry.driver_id == driver_id)
            .map(|entry| entry.position)
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
