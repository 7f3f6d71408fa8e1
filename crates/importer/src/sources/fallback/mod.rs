mod data;

use storage::models::{Constructor, DataOrigin, Driver, RaceResult, SeasonDataset};
use tracing::debug;

use crate::{Result, traits::SeasonSource};

pub use data::{preseason_2025, snapshot_2025};

/// Serves a fixed dataset. Every fetch succeeds.
#[derive(Debug, Clone)]
pub struct FallbackSource {
    dataset: SeasonDataset,
}

impl FallbackSource {
    pub fn from_dataset(mut dataset: SeasonDataset) -> Self {
        dataset.origin = DataOrigin::Fallback;
        Self { dataset }
    }

    pub fn preseason() -> Self {
        Self::from_dataset(preseason_2025())
    }

    pub fn last_known_good() -> Self {
        Self::from_dataset(snapshot_2025())
    }

    pub fn dataset(&self) -> &SeasonDataset {
        &self.dataset
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.dataset.drivers
    }

    pub fn constructors(&self) -> &[Constructor] {
        &self.dataset.constructors
    }
}

impl Default for FallbackSource {
    fn default() -> Self {
        Self::last_known_good()
    }
}

#[async_trait::async_trait]
impl SeasonSource for FallbackSource {
    async fn fetch_drivers(&self) -> Result<Vec<Driver>> {
        debug!("Serving {} fallback drivers", self.dataset.drivers.len());
        Ok(self.dataset.drivers.clone())
    }

    async fn fetch_constructors(&self) -> Result<Vec<Constructor>> {
        Ok(self.dataset.constructors.clone())
    }

    async fn fetch_season_results(&self) -> Result<Vec<RaceResult>> {
        Ok(self.dataset.season_results.clone())
    }

    fn name(&self) -> &'static str {
        "fallback"
    }

    fn origin(&self) -> DataOrigin {
        DataOrigin::Fallback
    }
}
