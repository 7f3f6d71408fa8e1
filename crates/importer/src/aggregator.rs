use std::future::Future;
use std::time::Duration;

use storage::models::{Constructor, DataOrigin, Driver, RaceResult, SeasonDataset};
use storage::services::{backfill_season, normalize, retain_known};
use tracing::{info, warn};

use crate::sources::FallbackSource;
use crate::traits::SeasonSource;
use crate::{ImporterError, Result};

pub const DRIVER_ROSTER_SIZE: usize = 20;
pub const CONSTRUCTOR_ROSTER_SIZE: usize = 10;
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct RosterConfig {
    pub drivers: usize,
    pub constructors: usize,
    pub fetch_timeout: Duration,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            drivers: DRIVER_ROSTER_SIZE,
            constructors: CONSTRUCTOR_ROSTER_SIZE,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

/// Raw output of one primary-source run, before any policy is applied.
#[derive(Debug)]
pub struct FetchOutcome {
    pub origin: DataOrigin,
    pub drivers: Result<Vec<Driver>>,
    pub constructors: Result<Vec<Constructor>>,
    pub season_results: Result<Vec<RaceResult>>,
}

/// Combines a primary source with a fallback dataset into one season.
pub struct SeasonAggregator {
    primary: Box<dyn SeasonSource>,
    fallback: FallbackSource,
    config: RosterConfig,
}

impl SeasonAggregator {
    pub fn new(primary: Box<dyn SeasonSource>, fallback: FallbackSource) -> Self {
        Self::with_config(primary, fallback, RosterConfig::default())
    }

    pub fn with_config(
        primary: Box<dyn SeasonSource>,
        fallback: FallbackSource,
        config: RosterConfig,
    ) -> Self {
        Self {
            primary,
            fallback,
            config,
        }
    }

    pub fn primary_name(&self) -> &'static str {
        self.primary.name()
    }

    /// Fetches the three categories concurrently and applies [`choose_dataset`].
    /// Never fails: any fetch failure yields the fallback dataset.
    pub async fn collect(&self) -> SeasonDataset {
        info!("Collecting season data from {}", self.primary.name());

        let timeout = self.config.fetch_timeout;
        let (drivers, constructors, season_results) = tokio::join!(
            with_timeout(timeout, self.primary.fetch_drivers()),
            with_timeout(timeout, self.primary.fetch_constructors()),
            with_timeout(timeout, self.primary.fetch_season_results()),
        );

        let outcome = FetchOutcome {
            origin: self.primary.origin(),
            drivers,
            constructors,
            season_results,
        };

        choose_dataset(outcome, &self.fallback, &self.config)
    }
}

async fn with_timeout<T>(
    timeout: Duration,
    fetch: impl Future<Output = Result<T>>,
) -> Result<T> {
    match tokio::time::timeout(timeout, fetch).await {
        Ok(result) => result,
        Err(_) => Err(ImporterError::Timeout(timeout)),
    }
}

/// All-or-nothing source policy.
///
/// When every category fetched, the rosters are normalized against the
/// fallback rosters and each race is backfilled with the normalized driver
/// ids. If any category failed, the fallback dataset is returned whole.
pub fn choose_dataset(
    outcome: FetchOutcome,
    fallback: &FallbackSource,
    config: &RosterConfig,
) -> SeasonDataset {
    let (drivers, constructors, season_results) =
        match (outcome.drivers, outcome.constructors, outcome.season_results) {
            (Ok(drivers), Ok(constructors), Ok(season_results)) => {
                (drivers, constructors, season_results)
            }
            (drivers, constructors, season_results) => {
                for (category, err) in [
                    ("drivers", drivers.err()),
                    ("constructors", constructors.err()),
                    ("results", season_results.err()),
                ] {
                    match err {
                        Some(err) if err.is_fetch_failure() => {
                            warn!("Fetching {} failed: {}", category, err);
                        }
                        Some(err) => warn!("Unexpected error fetching {}: {}", category, err),
                        None => {}
                    }
                }
                warn!("Using fallback season data");
                return fallback.dataset().clone();
            }
        };

    info!(
        "Fetched {} drivers, {} constructors, {} races",
        drivers.len(),
        constructors.len(),
        season_results.len()
    );

    let drivers = normalize(drivers, config.drivers, fallback.drivers());
    let constructors = normalize(constructors, config.constructors, fallback.constructors());

    // Results may name drivers the standings no longer carry (replacements,
    // truncated entries); those rows are dropped before backfilling.
    let known_ids: Vec<String> = drivers.iter().map(|d| d.id.clone()).collect();
    let season_results = season_results
        .into_iter()
        .map(|race| retain_known(race, &known_ids))
        .collect();
    let season_results = backfill_season(season_results, &known_ids);

    SeasonDataset::new(outcome.origin, drivers, constructors, season_results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use storage::models::ResultEntry;

    struct FakeSource {
        drivers: usize,
        fail_constructors: bool,
        delay: Option<Duration>,
    }

    impl FakeSource {
        fn healthy(drivers: usize) -> Self {
            Self {
                drivers,
                fail_constructors: false,
                delay: None,
            }
        }
    }

    fn fallback() -> FallbackSource {
        FallbackSource::last_known_good()
    }

    #[async_trait::async_trait]
    impl SeasonSource for FakeSource {
        async fn fetch_drivers(&self) -> Result<Vec<Driver>> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            Ok(fallback().drivers()[..self.drivers].to_vec())
        }

        async fn fetch_constructors(&self) -> Result<Vec<Constructor>> {
            if self.fail_constructors {
                return Err(ImporterError::StructuralMismatch(
                    "no team listing".to_string(),
                ));
            }
            Ok(fallback().constructors().to_vec())
        }

        async fn fetch_season_results(&self) -> Result<Vec<RaceResult>> {
            let mut race = RaceResult::new("Australian Grand Prix", 1, "2025-03-16");
            race.results.push(ResultEntry::new("NOR", 1));
            Ok(vec![race])
        }

        fn name(&self) -> &'static str {
            "fake"
        }

        fn origin(&self) -> DataOrigin {
            DataOrigin::Scraped
        }
    }

    #[tokio::test]
    async fn test_collect_falls_back_when_constructors_fail() {
        let source = FakeSource {
            fail_constructors: true,
            ..FakeSource::healthy(20)
        };
        let aggregator = SeasonAggregator::new(Box::new(source), fallback());

        let dataset = aggregator.collect().await;
        let expected = fallback();

        assert_eq!(dataset.origin, DataOrigin::Fallback);
        assert_eq!(dataset.drivers, expected.drivers());
        assert_eq!(dataset.constructors, expected.constructors());
        assert_eq!(dataset.season_results, expected.dataset().season_results);
    }

    #[tokio::test]
    async fn test_collect_pads_short_driver_roster() {
        let aggregator = SeasonAggregator::new(Box::new(FakeSource::healthy(18)), fallback());

        let dataset = aggregator.collect().await;

        assert_eq!(dataset.origin, DataOrigin::Scraped);
        assert_eq!(dataset.drivers.len(), DRIVER_ROSTER_SIZE);
        let ids: HashSet<_> = dataset.drivers.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), DRIVER_ROSTER_SIZE);
        let positions: Vec<u32> = dataset.drivers.iter().map(|d| d.position).collect();
        assert_eq!(positions, (1..=20).collect::<Vec<u32>>());
        assert_eq!(dataset.constructors.len(), CONSTRUCTOR_ROSTER_SIZE);
    }

    #[tokio::test]
    async fn test_collect_backfills_race_results() {
        let aggregator = SeasonAggregator::new(Box::new(FakeSource::healthy(20)), fallback());

        let dataset = aggregator.collect().await;
        let race = &dataset.season_results[0];

        assert_eq!(race.results.len(), DRIVER_ROSTER_SIZE);
        assert_eq!(race.results[0], ResultEntry::new("NOR", 1));
        let positions: Vec<u32> = race.results.iter().map(|r| r.position).collect();
        assert_eq!(positions, (1..=20).collect::<Vec<u32>>());
        for entry in &race.results {
            assert!(dataset.find_driver(&entry.driver_id).is_some());
        }
    }

    #[tokio::test]
    async fn test_collect_treats_timeout_as_failure() {
        let source = FakeSource {
            delay: Some(Duration::from_millis(500)),
            ..FakeSource::healthy(20)
        };
        let config = RosterConfig {
            fetch_timeout: Duration::from_millis(20),
            ..RosterConfig::default()
        };
        let aggregator = SeasonAggregator::with_config(Box::new(source), fallback(), config);

        let dataset = aggregator.collect().await;

        assert_eq!(dataset.origin, DataOrigin::Fallback);
    }

    #[test]
    fn test_choose_dataset_truncates_long_rosters() {
        let config = RosterConfig {
            drivers: 5,
            constructors: 3,
            ..RosterConfig::default()
        };
        let pool = fallback();
        let outcome = FetchOutcome {
            origin: DataOrigin::Api,
            drivers: Ok(pool.drivers().to_vec()),
            constructors: Ok(pool.constructors().to_vec()),
            season_results: Ok(Vec::new()),
        };

        let dataset = choose_dataset(outcome, &pool, &config);

        assert_eq!(dataset.origin, DataOrigin::Api);
        assert_eq!(dataset.drivers.len(), 5);
        assert_eq!(dataset.drivers[..], pool.drivers()[..5]);
        assert_eq!(dataset.constructors.len(), 3);
        assert!(dataset.season_results.is_empty());
    }

    #[test]
    fn test_choose_dataset_drops_drivers_missing_from_standings() {
        let pool = fallback();
        let mut race = RaceResult::new("Australian GP", 1, "2025-03-16");
        race.results.push(ResultEntry::new("NOR", 1));
        race.results.push(ResultEntry::new("COL", 2));
        let outcome = FetchOutcome {
            origin: DataOrigin::Scraped,
            drivers: Ok(pool.drivers().to_vec()),
            constructors: Ok(pool.constructors().to_vec()),
            season_results: Ok(vec![race]),
        };

        let dataset = choose_dataset(outcome, &pool, &RosterConfig::default());
        let race = &dataset.season_results[0];

        assert_eq!(race.results.len(), DRIVER_ROSTER_SIZE);
        assert_eq!(race.position_of("COL"), None);
        assert_eq!(race.results[0], ResultEntry::new("NOR", 1));
        let positions: Vec<u32> = race.results.iter().map(|r| r.position).collect();
        assert_eq!(positions, (1..=20).collect::<Vec<u32>>());
        assert!(crate::validator::SeasonValidator::validate(&dataset).is_ok());
    }
}
