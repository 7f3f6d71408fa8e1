use storage::models::{Driver, SeasonDataset};

use crate::error::WebError;

/// Drivers in standings order
pub fn list_drivers(dataset: &SeasonDataset) -> Vec<Driver> {
    let mut drivers = dataset.drivers.clone();
    drivers.sort_by_key(|d| d.position);
    drivers
}

/// Get driver by code
pub fn get_driver(dataset: &SeasonDataset, id: &str) -> Result<Driver, WebError> {
    dataset
        .find_driver(id)
        .cloned()
        .ok_or_else(|| WebError::DriverNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use importer::sources::fallback::snapshot_2025;

    #[test]
    fn test_list_drivers_in_standings_order() {
        let mut dataset = snapshot_2025();
        dataset.drivers.reverse();

        let drivers = list_drivers(&dataset);

        let positions: Vec<u32> = drivers.iter().map(|d| d.position).collect();
        assert_eq!(positions, (1..=20).collect::<Vec<u32>>());
    }

    #[test]
    fn test_get_driver() {
        let dataset = snapshot_2025();

        assert_eq!(get_driver(&dataset, "NOR").unwrap().name, "Lando Norris");
        assert!(matches!(
            get_driver(&dataset, "XYZ"),
            Err(WebError::DriverNotFound(id)) if id == "XYZ"
        ));
    }
}
