mod client;
pub mod parser;

pub use client::{FORMULA1_WEBSITE, Formula1Client};

use std::time::Duration;

use storage::models::{Constructor, DataOrigin, Driver, RaceResult, TeamPalette};
use tracing::info;

use crate::{Result, traits::SeasonSource};

/// Scrapes driver, team and results listings from formula1.com.
pub struct Formula1Source {
    client: Formula1Client,
    palette: TeamPalette,
}

impl Formula1Source {
    pub fn new(palette: TeamPalette, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: Formula1Client::new(timeout)?,
            palette,
        })
    }

    pub fn with_client(client: Formula1Client, palette: TeamPalette) -> Self {
        Self { client, palette }
    }
}

#[async_trait::async_trait]
impl SeasonSource for Formula1Source {
    async fn fetch_drivers(&self) -> Result<Vec<Driver>> {
        let html = self.client.fetch_drivers_page().await?;
        let drivers = parser::parse_drivers(&html, self.client.base_url())?;
        info!("Found {} drivers", drivers.len());
        Ok(drivers)
    }

    async fn fetch_constructors(&self) -> Result<Vec<Constructor>> {
        let html = self.client.fetch_teams_page().await?;
        let constructors =
            parser::parse_constructors(&html, self.client.base_url(), &self.palette)?;
        info!("Found {} constructors", constructors.len());
        Ok(constructors)
    }

    async fn fetch_season_results(&self) -> Result<Vec<RaceResult>> {
        let html = self.client.fetch_results_page().await?;
        let races = parser::parse_race_results(&html)?;
        info!("Found {} races", races.len());
        Ok(races)
    }

    fn name(&self) -> &'static str {
        "formula1.com"
    }

    fn origin(&self) -> DataOrigin {
        DataOrigin::Scraped
    }
}
