use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, StorageError};
use crate::models::SeasonDataset;

/// Reads and writes a season dataset as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    pub async fn load(&self) -> Result<SeasonDataset> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound);
            }
            Err(e) => return Err(e.into()),
        };

        let dataset: SeasonDataset = serde_json::from_str(&json)?;
        info!(
            "Loaded snapshot {} ({} drivers, {} constructors, {} races)",
            self.path.display(),
            dataset.drivers.len(),
            dataset.constructors.len(),
            dataset.season_results.len()
        );
        Ok(dataset)
    }

    /// Writes to a temporary file next to the target, then renames it into
    /// place.
    pub async fn save(&self, dataset: &SeasonDataset) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(dataset)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        info!("Saved snapshot to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Constructor, DataOrigin, Driver, RaceResult, ResultEntry};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("season-snapshot-{}-{}", std::process::id(), name))
            .join("season.json")
    }

    fn sample() -> SeasonDataset {
        let mut race = RaceResult::new("Australian GP", 1, "2025-03-16");
        race.results.push(ResultEntry::new("NOR", 1));

        SeasonDataset::new(
            DataOrigin::Scraped,
            vec![Driver {
                id: "NOR".to_string(),
                name: "Lando Norris".to_string(),
                team: "McLaren".to_string(),
                points: 25.0,
                position: 1,
                position_change: 0,
                image_url: "https://example.com/nor.png".to_string(),
            }],
            vec![Constructor {
                id: "MCL".to_string(),
                name: "McLaren".to_string(),
                points: 25.0,
                position: 1,
                color: "#FF8700".to_string(),
                logo_url: "https://example.com/mcl.png".to_string(),
            }],
            vec![race],
        )
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let path = temp_path("roundtrip");
        let store = SnapshotStore::new(&path);
        let dataset = sample();

        store.save(&dataset).await.unwrap();
        assert!(store.exists().await);

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, dataset);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let store = SnapshotStore::new(temp_path("missing"));
        let err = store.load().await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_json_uses_camel_case_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("seasonResults").is_some());
        assert!(json.get("generatedAt").is_some());
        assert_eq!(json["origin"], "scraped");
        assert!(json["drivers"][0].get("positionChange").is_some());
        assert!(json["drivers"][0].get("imageUrl").is_some());
        assert!(json["constructors"][0].get("logoUrl").is_some());
        assert_eq!(json["seasonResults"][0]["results"][0]["driverId"], "NOR");
    }
}
