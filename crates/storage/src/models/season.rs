use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Constructor, Driver, RaceResult};

/// Where the records of a dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    Scraped,
    Api,
    Fallback,
}

impl DataOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scraped => "scraped",
            Self::Api => "api",
            Self::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The unit handed to consumers: one complete, self-consistent season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeasonDataset {
    pub origin: DataOrigin,
    pub generated_at: DateTime<Utc>,
    pub drivers: Vec<Driver>,
    pub constructors: Vec<Constructor>,
    pub season_results: Vec<RaceResult>,
}

impl SeasonDataset {
    pub fn new(
        origin: DataOrigin,
        drivers: Vec<Driver>,
        constructors: Vec<Constructor>,
        season_results: Vec<RaceResult>,
    ) -> Self {
        Self {
            origin,
            generated_at: Utc::now(),
            drivers,
            constructors,
            season_results,
        }
    }

    pub fn find_driver(&self, id: &str) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id.eq_ignore_ascii_case(id))
    }

    pub fn find_constructor(&self, id: &str) -> Option<&Constructor> {
        self.constructors
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(id))
    }

    pub fn find_race(&self, round: u32) -> Option<&RaceResult> {
        self.season_results.iter().find(|r| r.round == round)
    }

    /// Races that already have at least one classified finisher.
    pub fn completed_races(&self) -> usize {
        self.season_results.iter().filter(|r| !r.is_empty()).count()
    }
}
