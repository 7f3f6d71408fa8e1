use std::collections::HashSet;

use tracing::warn;

use crate::models::{RaceResult, ResultEntry};

/// Gives every known driver a finishing position in `race`.
///
/// Drivers missing from the classification are appended behind the last
/// recorded position, in `known_ids` order. Races that already list at least
/// as many entries as there are known drivers are returned unchanged.
pub fn backfill(mut race: RaceResult, known_ids: &[String]) -> RaceResult {
    if race.results.len() >= known_ids.len() {
        return race;
    }

    let present: HashSet<String> = race
        .results
        .iter()
        .map(|entry| entry.driver_id.clone())
        .collect();
    let mut max_position = race
        .results
        .iter()
        .map(|entry| entry.position)
        .max()
        .unwrap_or(0);

    for id in known_ids {
        if present.contains(id) {
            continue;
        }
        max_position += 1;
        race.results.push(ResultEntry::new(id.clone(), max_position));
    }

    // Vec::sort_by_key is stable, so equal positions keep source order.
    race.results.sort_by_key(|entry| entry.position);
    race
}

/// Drops result rows for drivers outside `known_ids` and renumbers the
/// remaining rows `1..` in their finishing order.
///
/// A race without unknown drivers is returned unchanged.
pub fn retain_known(mut race: RaceResult, known_ids: &[String]) -> RaceResult {
    let before = race.results.len();
    race.results.retain(|entry| {
        let known = known_ids.contains(&entry.driver_id);
        if !known {
            warn!(
                "Dropping result for unknown driver '{}' in {}",
                entry.driver_id, race.race
            );
        }
        known
    });

    if race.results.len() < before {
        race.results.sort_by_key(|entry| entry.position);
        for (entry, position) in race.results.iter_mut().zip(1..) {
            entry.position = position;
        }
    }
    race
}

pub fn backfill_season(races: Vec<RaceResult>, known_ids: &[String]) -> Vec<RaceResult> {
    races
        .into_iter()
        .map(|race| backfill(race, known_ids))
        .collect()
}
