use storage::models::{Constructor, SeasonDataset};

use crate::error::WebError;

pub fn list_constructors(dataset: &SeasonDataset) -> Vec<Constructor> {
    let mut constructors = dataset.constructors.clone();
    constructors.sort_by_key(|c| c.position);
    constructors
}

pub fn get_constructor(dataset: &SeasonDataset, id: &str) -> Result<Constructor, WebError> {
    dataset
        .find_constructor(id)
        .cloned()
        .ok_or_else(|| WebError::ConstructorNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use importer::sources::fallback::snapshot_2025;

    #[test]
    fn test_get_constructor_ignores_case() {
        let dataset = snapshot_2025();

        assert_eq!(get_constructor(&dataset, "mcl").unwrap().name, "McLaren");
        assert!(matches!(
            get_constructor(&dataset, "AUD"),
            Err(WebError::ConstructorNotFound(_))
        ));
    }

    #[test]
    fn test_list_constructors() {
        let dataset = snapshot_2025();

        let constructors = list_constructors(&dataset);

        assert_eq!(constructors.len(), 10);
        assert_eq!(constructors[0].position, 1);
    }
}
