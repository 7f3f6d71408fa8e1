use std::time::Duration;

use super::models::{ApiResponse, RaceData, StandingsData};
use crate::Result;
use crate::sources::HttpFetcher;

pub const ERGAST_CURRENT_SEASON: &str = "https://ergast.com/api/f1/current";

pub struct ErgastClient {
    base_url: String,
    http: HttpFetcher,
}

impl ErgastClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_base_url(ERGAST_CURRENT_SEASON, timeout)
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: HttpFetcher::new(timeout)?,
        })
    }

    pub async fn fetch_driver_standings(&self) -> Result<StandingsData> {
        let url = format!("{}/driverStandings.json", self.base_url);
        let response: ApiResponse<StandingsData> = self.http.get_json(&url).await?;
        Ok(response.mr_data)
    }

    pub async fn fetch_constructor_standings(&self) -> Result<StandingsData> {
        let url = format!("{}/constructorStandings.json", self.base_url);
        let response: ApiResponse<StandingsData> = self.http.get_json(&url).await?;
        Ok(response.mr_data)
    }

    pub async fn fetch_results(&self) -> Result<RaceData> {
        let url = format!("{}/results.json?limit=1000", self.base_url);
        let response: ApiResponse<RaceData> = self.http.get_json(&url).await?;
        Ok(response.mr_data)
    }
}
