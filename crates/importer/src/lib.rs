pub mod aggregator;
pub mod error;
pub mod sources;
pub mod traits;
pub mod validator;

pub use aggregator::{RosterConfig, SeasonAggregator, choose_dataset};
pub use error::{ImporterError, Result};
pub use sources::{ErgastSource, FallbackSource, Formula1Source};
pub use traits::SeasonSource;
pub use validator::{SeasonValidator, ValidationReport};

use std::str::FromStr;
use std::time::Duration;

use storage::models::TeamPalette;

/// Which live source feeds the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Scrape,
    Api,
}

impl SourceKind {
    pub fn build(self, palette: TeamPalette, timeout: Duration) -> Result<Box<dyn SeasonSource>> {
        let source: Box<dyn SeasonSource> = match self {
            Self::Scrape => Box::new(Formula1Source::new(palette, timeout)?),
            Self::Api => Box::new(ErgastSource::new(palette, timeout)?),
        };
        Ok(source)
    }
}

impl FromStr for SourceKind {
    type Err = ImporterError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "scrape" | "formula1" => Ok(Self::Scrape),
            "api" | "ergast" => Ok(Self::Api),
            other => Err(ImporterError::ValidationError(format!(
                "Unknown season source '{}'. Expected 'scrape' or 'api'",
                other
            ))),
        }
    }
}
