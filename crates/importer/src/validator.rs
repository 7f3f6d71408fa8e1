use std::collections::HashSet;

use storage::models::SeasonDataset;
use tracing::warn;

use crate::{ImporterError, Result};

pub struct SeasonValidator;

impl SeasonValidator {
    pub fn validate(dataset: &SeasonDataset) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        if dataset.drivers.is_empty() {
            report.errors.push("At least one driver is required".to_string());
        }
        if dataset.constructors.is_empty() {
            report
                .errors
                .push("At least one constructor is required".to_string());
        }

        let mut driver_ids = HashSet::new();
        for driver in &dataset.drivers {
            if driver.id.is_empty() {
                report
                    .errors
                    .push(format!("Driver '{}' has an empty id", driver.name));
            }
            if !driver_ids.insert(driver.id.as_str()) {
                report
                    .errors
                    .push(format!("Duplicate driver id: '{}'", driver.id));
            }
            if driver.name.is_empty() {
                report
                    .errors
                    .push(format!("Driver '{}' has an empty name", driver.id));
            }
            if !(driver.points.is_finite() && driver.points >= 0.0) {
                report.errors.push(format!(
                    "Driver '{}' has invalid points: {}",
                    driver.id, driver.points
                ));
            }
            if driver.team.is_empty() {
                report
                    .warnings
                    .push(format!("Driver '{}' has no team", driver.id));
            }
            if driver.image_url.is_empty() {
                report
                    .warnings
                    .push(format!("Driver '{}' has no image", driver.id));
            }
        }
        check_positions(
            "Driver",
            dataset.drivers.iter().map(|d| d.position),
            &mut report,
        );

        let mut constructor_ids = HashSet::new();
        for constructor in &dataset.constructors {
            if !constructor_ids.insert(constructor.id.as_str()) {
                report
                    .errors
                    .push(format!("Duplicate constructor id: '{}'", constructor.id));
            }
            if !(constructor.points.is_finite() && constructor.points >= 0.0) {
                report.errors.push(format!(
                    "Constructor '{}' has invalid points: {}",
                    constructor.id, constructor.points
                ));
            }
            if !is_hex_color(&constructor.color) {
                report.errors.push(format!(
                    "Constructor '{}' has invalid color '{}'. Expected #RRGGBB",
                    constructor.id, constructor.color
                ));
            }
            if constructor.logo_url.is_empty() {
                report
                    .warnings
                    .push(format!("Constructor '{}' has no logo", constructor.id));
            }
        }
        check_positions(
            "Constructor",
            dataset.constructors.iter().map(|c| c.position),
            &mut report,
        );

        let mut previous_round = 0;
        for race in &dataset.season_results {
            if race.round == 0 {
                report
                    .errors
                    .push(format!("Race '{}' has round 0. Rounds start at 1", race.race));
            } else if race.round <= previous_round {
                report.errors.push(format!(
                    "Race '{}' round {} does not follow round {}",
                    race.race, race.round, previous_round
                ));
            }
            previous_round = previous_round.max(race.round);

            if race.is_empty() {
                report
                    .warnings
                    .push(format!("Race '{}' has no results yet", race.race));
                continue;
            }

            let mut seen = HashSet::new();
            for entry in &race.results {
                if !driver_ids.contains(entry.driver_id.as_str()) {
                    report.errors.push(format!(
                        "Race '{}' references unknown driver: '{}'",
                        race.race, entry.driver_id
                    ));
                }
                if !seen.insert(entry.driver_id.as_str()) {
                    report.errors.push(format!(
                        "Race '{}' lists driver '{}' more than once",
                        race.race, entry.driver_id
                    ));
                }
            }

            if race.results.len() < dataset.drivers.len() {
                report.warnings.push(format!(
                    "Race '{}' has {} of {} results",
                    race.race,
                    race.results.len(),
                    dataset.drivers.len()
                ));
            }
        }

        if !report.errors.is_empty() {
            Err(ImporterError::ValidationError(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }
}

fn check_positions(
    label: &str,
    positions: impl Iterator<Item = u32>,
    report: &mut ValidationReport,
) {
    let mut positions: Vec<u32> = positions.collect();
    positions.sort_unstable();

    let contiguous = positions
        .iter()
        .zip(1u32..)
        .all(|(position, expected)| *position == expected);
    if !contiguous {
        report.errors.push(format!(
            "{} positions are not a contiguous 1..{} ranking",
            label,
            positions.len()
        ));
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}
