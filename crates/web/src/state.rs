use std::sync::Arc;
use std::time::Duration;

use importer::{FallbackSource, RosterConfig, SeasonAggregator, SeasonSource};
use storage::{
    SnapshotStore,
    dto::season::RefreshResponse,
    models::{DataOrigin, SeasonDataset},
};
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

/// Shared handler state. The dataset is swapped as a whole on refresh, so a
/// reader holding an `Arc` keeps a consistent view.
#[derive(Clone)]
pub struct AppState {
    dataset: Arc<RwLock<Arc<SeasonDataset>>>,
    refresher: Arc<Refresher>,
}

pub struct Refresher {
    source: Arc<dyn SeasonSource>,
    store: Option<SnapshotStore>,
    config: RosterConfig,
    running: Mutex<()>,
}

impl Refresher {
    pub fn new(
        source: Arc<dyn SeasonSource>,
        store: Option<SnapshotStore>,
        config: RosterConfig,
    ) -> Self {
        Self {
            source,
            store,
            config,
            running: Mutex::new(()),
        }
    }
}

impl AppState {
    pub fn new(initial: SeasonDataset, refresher: Refresher) -> Self {
        Self {
            dataset: Arc::new(RwLock::new(Arc::new(initial))),
            refresher: Arc::new(refresher),
        }
    }

    pub async fn current(&self) -> Arc<SeasonDataset> {
        self.dataset.read().await.clone()
    }

    /// Runs one collection against the live source, using the dataset being
    /// served as the fallback, and swaps the result in.
    ///
    /// Only one refresh runs at a time; concurrent callers wait for it.
    pub async fn refresh(&self) -> RefreshResponse {
        let _running = self.refresher.running.lock().await;

        let fallback = FallbackSource::from_dataset(self.current().await.as_ref().clone());
        let aggregator = SeasonAggregator::with_config(
            Box::new(self.refresher.source.clone()),
            fallback,
            self.refresher.config.clone(),
        );

        let dataset = Arc::new(aggregator.collect().await);
        *self.dataset.write().await = dataset.clone();
        tracing::info!(
            "Season data refreshed from {} (origin: {})",
            aggregator.primary_name(),
            dataset.origin
        );

        let persisted = self.persist(&dataset).await;

        RefreshResponse {
            origin: dataset.origin,
            generated_at: dataset.generated_at,
            persisted,
        }
    }

    async fn persist(&self, dataset: &SeasonDataset) -> bool {
        let Some(store) = &self.refresher.store else {
            return false;
        };
        if dataset.origin == DataOrigin::Fallback {
            tracing::debug!("Fallback data served, snapshot left untouched");
            return false;
        }

        match store.save(dataset).await {
            Ok(()) => {
                tracing::info!("Snapshot written to {}", store.path().display());
                true
            }
            Err(e) => {
                tracing::error!("Failed to write snapshot {}: {}", store.path().display(), e);
                false
            }
        }
    }
}

pub fn spawn_scheduled_refresh(state: AppState, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            tracing::debug!("Scheduled season refresh");
            state.refresh().await;
        }
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use importer::{ImporterError, Result, sources::fallback::snapshot_2025};
    use storage::models::{Constructor, Driver, RaceResult};

    pub struct StaticSource {
        pub dataset: Option<SeasonDataset>,
    }

    #[async_trait::async_trait]
    impl SeasonSource for StaticSource {
        async fn fetch_drivers(&self) -> Result<Vec<Driver>> {
            match &self.dataset {
                Some(dataset) => Ok(dataset.drivers.clone()),
                None => Err(ImporterError::MalformedResponse("offline".to_string())),
            }
        }

        async fn fetch_constructors(&self) -> Result<Vec<Constructor>> {
            match &self.dataset {
                Some(dataset) => Ok(dataset.constructors.clone()),
                None => Err(ImporterError::MalformedResponse("offline".to_string())),
            }
        }

        async fn fetch_season_results(&self) -> Result<Vec<RaceResult>> {
            match &self.dataset {
                Some(dataset) => Ok(dataset.season_results.clone()),
                None => Err(ImporterError::MalformedResponse("offline".to_string())),
            }
        }

        fn name(&self) -> &'static str {
            "static"
        }

        fn origin(&self) -> DataOrigin {
            DataOrigin::Api
        }
    }

    pub fn test_state(online: bool, store: Option<SnapshotStore>) -> AppState {
        let mut live = snapshot_2025();
        live.drivers[0].points += 25.0;
        let source = StaticSource {
            dataset: online.then_some(live),
        };
        let refresher = Refresher::new(Arc::new(source), store, RosterConfig::default());
        AppState::new(snapshot_2025(), refresher)
    }

    #[tokio::test]
    async fn test_refresh_swaps_dataset() {
        let state = test_state(true, None);
        let before = state.current().await;

        let response = state.refresh().await;
        let after = state.current().await;

        assert_eq!(response.origin, DataOrigin::Api);
        assert!(!response.persisted);
        assert_eq!(after.origin, DataOrigin::Api);
        assert_eq!(after.drivers[0].points, before.drivers[0].points + 25.0);
        assert_eq!(before.origin, DataOrigin::Fallback);
    }

    #[tokio::test]
    async fn test_refresh_keeps_serving_data_when_source_is_down() {
        let state = test_state(false, None);

        let response = state.refresh().await;
        let after = state.current().await;

        assert_eq!(response.origin, DataOrigin::Fallback);
        assert_eq!(after.drivers, snapshot_2025().drivers);
    }

    #[tokio::test]
    async fn test_refresh_persists_live_data() {
        let path = std::env::temp_dir()
            .join(format!("season-web-refresh-{}", std::process::id()))
            .join("season.json");
        let store = SnapshotStore::new(&path);
        let state = test_state(true, Some(store.clone()));

        let response = state.refresh().await;

        assert!(response.persisted);
        let saved = store.load().await.unwrap();
        assert_eq!(saved.origin, DataOrigin::Api);

        let _ = std::fs::remove_file(&path);
    }
}
