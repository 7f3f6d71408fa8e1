use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use importer::SourceKind;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub season_source: SourceKind,
    pub snapshot_path: PathBuf,
    pub refresh_interval: Option<Duration>,
    pub fetch_timeout: Duration,
    pub team_palette_path: Option<PathBuf>,
    pub api_keys: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let refresh_secs: u64 = env_or("REFRESH_INTERVAL_SECS", "3600")
            .parse()
            .context("REFRESH_INTERVAL_SECS must be a number")?;
        let fetch_timeout_secs: u64 = env_or("FETCH_TIMEOUT_SECS", "30")
            .parse()
            .context("FETCH_TIMEOUT_SECS must be a number")?;

        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            season_source: env_or("SEASON_SOURCE", "scrape")
                .parse()
                .context("Invalid SEASON_SOURCE")?,
            snapshot_path: env_or("SNAPSHOT_PATH", "./data/season.json").into(),
            refresh_interval: (refresh_secs > 0).then(|| Duration::from_secs(refresh_secs)),
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
            team_palette_path: std::env::var("TEAM_PALETTE_PATH").ok().map(PathBuf::from),
            api_keys: std::env::var("API_KEYS").unwrap_or_default(),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
