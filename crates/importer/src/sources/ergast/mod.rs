mod client;
mod mapper;
mod models;

pub use client::{ERGAST_CURRENT_SEASON, ErgastClient};
pub use mapper::ErgastMapper;
pub use models::*;

use std::time::Duration;

use storage::models::{Constructor, DataOrigin, Driver, RaceResult, TeamPalette};
use tracing::info;

use crate::{Result, traits::SeasonSource};

/// Reads current-season standings and results from an Ergast-compatible API.
pub struct ErgastSource {
    client: ErgastClient,
    palette: TeamPalette,
}

impl ErgastSource {
    pub fn new(palette: TeamPalette, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: ErgastClient::new(timeout)?,
            palette,
        })
    }

    pub fn with_client(client: ErgastClient, palette: TeamPalette) -> Self {
        Self { client, palette }
    }
}

#[async_trait::async_trait]
impl SeasonSource for ErgastSource {
    async fn fetch_drivers(&self) -> Result<Vec<Driver>> {
        let data = self.client.fetch_driver_standings().await?;
        let drivers = ErgastMapper::new(&self.palette).drivers(data)?;
        info!("Fetched {} driver standings", drivers.len());
        Ok(drivers)
    }

    async fn fetch_constructors(&self) -> Result<Vec<Constructor>> {
        let data = self.client.fetch_constructor_standings().await?;
        let constructors = ErgastMapper::new(&self.palette).constructors(data)?;
        info!("Fetched {} constructor standings", constructors.len());
        Ok(constructors)
    }

    async fn fetch_season_results(&self) -> Result<Vec<RaceResult>> {
        let data = self.client.fetch_results().await?;
        let races = ErgastMapper::new(&self.palette).races(data.race_table.races)?;
        info!("Fetched results for {} races", races.len());
        Ok(races)
    }

    fn name(&self) -> &'static str {
        "ergast"
    }

    fn origin(&self) -> DataOrigin {
        DataOrigin::Api
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImporterError;
    use crate::sources::http::test_server::{closed, serve};

    const STANDINGS: &str = r#"{"MRData": {"StandingsTable": {"StandingsLists": [{
        "DriverStandings": [{
            "position": "1", "points": "77",
            "Driver": {"driverId": "norris", "permanentNumber": "4", "code": "NOR",
                       "givenName": "Lando", "familyName": "Norris"},
            "Constructors": [{"constructorId": "mclaren", "name": "McLaren"}]
        }]
    }]}}}"#;

    async fn source(base: String) -> ErgastSource {
        let client = ErgastClient::with_base_url(base, Duration::from_secs(5)).unwrap();
        ErgastSource::with_client(client, TeamPalette::season_2025())
    }

    #[tokio::test]
    async fn test_fetch_drivers_from_api() {
        let source = source(serve("200 OK", STANDINGS).await).await;

        let drivers = source.fetch_drivers().await.unwrap();

        assert_eq!(drivers.len(), 1);
        assert_eq!(drivers[0].id, "NOR");
        assert_eq!(drivers[0].points, 77.0);
    }

    #[tokio::test]
    async fn test_wrong_envelope_is_fetch_failure() {
        let source = source(serve("200 OK", STANDINGS).await).await;

        let err = source.fetch_season_results().await.unwrap_err();

        assert!(matches!(err, ImporterError::ParseError(_)));
        assert!(err.is_fetch_failure());
    }

    #[tokio::test]
    async fn test_empty_standings_is_malformed() {
        let body = r#"{"MRData": {"StandingsTable": {"StandingsLists": []}}}"#;
        let source = source(serve("200 OK", body).await).await;

        let err = source.fetch_constructors().await.unwrap_err();

        assert!(matches!(err, ImporterError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_server_error_is_http_status() {
        let source = source(serve("503 Service Unavailable", "").await).await;

        let err = source.fetch_drivers().await.unwrap_err();

        assert!(matches!(err, ImporterError::HttpStatus { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_api_is_request_error() {
        let source = source(closed().await).await;

        let err = source.fetch_drivers().await.unwrap_err();

        assert!(matches!(err, ImporterError::RequestError(_)));
    }
}
