use std::sync::Arc;

use storage::models::{Constructor, DataOrigin, Driver, RaceResult};

use crate::Result;

/// A place season data can be fetched from.
///
/// Each category is fetched independently so callers can issue the three
/// requests concurrently.
#[async_trait::async_trait]
pub trait SeasonSource: Send + Sync {
    async fn fetch_drivers(&self) -> Result<Vec<Driver>>;

    async fn fetch_constructors(&self) -> Result<Vec<Constructor>>;

    async fn fetch_season_results(&self) -> Result<Vec<RaceResult>>;

    fn name(&self) -> &'static str;

    fn origin(&self) -> DataOrigin;
}

#[async_trait::async_trait]
impl<S: SeasonSource + ?Sized> SeasonSource for Arc<S> {
    async fn fetch_drivers(&self) -> Result<Vec<Driver>> {
        (**self).fetch_drivers().await
    }

    async fn fetch_constructors(&self) -> Result<Vec<Constructor>> {
        (**self).fetch_constructors().await
    }

    async fn fetch_season_results(&self) -> Result<Vec<RaceResult>> {
        (**self).fetch_season_results().await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn origin(&self) -> DataOrigin {
        (**self).origin()
    }
}
