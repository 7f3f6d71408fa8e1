use std::collections::HashSet;

use tracing::{debug, warn};

use crate::models::{Constructor, Driver};

/// A standings record that carries a short id and a table position.
pub trait Ranked {
    fn id(&self) -> &str;
    fn set_position(&mut self, position: u32);
}

impl Ranked for Driver {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_position(&mut self, position: u32) {
        self.position = position;
    }
}

impl Ranked for Constructor {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_position(&mut self, position: u32) {
        self.position = position;
    }
}

/// Forces a standings table to exactly `target` entries with positions
/// `1..=target`.
///
/// Records whose id repeats an earlier record are dropped (first wins).
/// Short tables are padded from `fallback_pool` in pool order, skipping ids
/// already present; long tables keep their first `target` entries in the
/// order given. Any incoming `position` is discarded and recomputed from the
/// final order. If the pool runs out before `target` is reached the result is
/// shorter than `target`.
pub fn normalize<T>(records: Vec<T>, target: usize, fallback_pool: &[T]) -> Vec<T>
where
    T: Ranked + Clone,
{
    let incoming = records.len();
    let mut seen: HashSet<String> = HashSet::with_capacity(target);
    let mut out: Vec<T> = Vec::with_capacity(target);

    for record in records {
        if !seen.insert(record.id().to_string()) {
            warn!("Dropping duplicate id '{}' from source records", record.id());
            continue;
        }
        out.push(record);
    }

    if out.len() < target {
        for candidate in fallback_pool {
            if out.len() == target {
                break;
            }
            if seen.insert(candidate.id().to_string()) {
                out.push(candidate.clone());
            }
        }

        if out.len() < target {
            warn!(
                "Fallback pool exhausted: {} of {} records available",
                out.len(),
                target
            );
        }
    }

    out.truncate(target);

    for (idx, record) in out.iter_mut().enumerate() {
        record.set_position(idx as u32 + 1);
    }

    debug!("Normalized {} records into {}", incoming, out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(id: &str, position: u32) -> Driver {
        Driver {
            id: id.to_string(),
            name: format!("Driver {}", id),
            team: "Team".to_string(),
            points: 0.0,
            position,
            position_change: 0,
            image_url: String::new(),
        }
    }

    fn roster(prefix: &str, count: usize) -> Vec<Driver> {
        (0..count)
            .map(|i| driver(&format!("{}{:02}", prefix, i), 99))
            .collect()
    }

    fn positions(records: &[Driver]) -> Vec<u32> {
        records.iter().map(|d| d.position).collect()
    }

    #[test]
    fn test_output_length_matches_target() {
        let pool = roster("F", 30);
        for len in [0, 5, 20, 25] {
            let out = normalize(roster("S", len), 20, &pool);
            assert_eq!(out.len(), 20, "input length {}", len);
        }
    }

    #[test]
    fn test_positions_are_contiguous() {
        let pool = roster("F", 30);
        for len in [3, 20, 27] {
            let out = normalize(roster("S", len), 20, &pool);
            assert_eq!(positions(&out), (1..=20).collect::<Vec<u32>>());
        }
    }

    #[test]
    fn test_short_roster_padded_with_unseen_fallback_entries() {
        let scraped: Vec<Driver> = (0..18).map(|i| driver(&format!("D{:02}", i), 0)).collect();
        // The first two pool entries are already present and must be skipped.
        let pool = vec![
            driver("D00", 1),
            driver("D01", 2),
            driver("FB1", 3),
            driver("FB2", 4),
            driver("FB3", 5),
        ];

        let out = normalize(scraped, 20, &pool);

        assert_eq!(out.len(), 20);
        assert_eq!(out[18].id, "FB1");
        assert_eq!(out[19].id, "FB2");
        let ids: HashSet<&str> = out.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), 20);
        assert_eq!(positions(&out), (1..=20).collect::<Vec<u32>>());
    }

    #[test]
    fn test_long_roster_truncated_in_order() {
        let out = normalize(roster("S", 12), 10, &[]);
        assert_eq!(out.len(), 10);
        assert_eq!(out.first().unwrap().id, "S00");
        assert_eq!(out.last().unwrap().id, "S09");
    }

    #[test]
    fn test_duplicate_ids_dropped() {
        let records = vec![driver("VER", 1), driver("NOR", 2), driver("VER", 3)];
        let pool = vec![driver("PIA", 1)];

        let out = normalize(records, 3, &pool);

        let ids: Vec<&str> = out.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["VER", "NOR", "PIA"]);
    }

    #[test]
    fn test_exhausted_pool_returns_what_is_available() {
        let out = normalize(roster("S", 2), 5, &[driver("F", 0)]);
        assert_eq!(out.len(), 3);
        assert_eq!(positions(&out), vec![1, 2, 3]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let pool = roster("F", 20);
        let once = normalize(roster("S", 15), 20, &pool);
        let twice = normalize(once.clone(), 20, &pool);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_constructors_normalized_too() {
        let team = |id: &str| Constructor {
            id: id.to_string(),
            name: id.to_string(),
            points: 0.0,
            position: 0,
            color: "#888888".to_string(),
            logo_url: String::new(),
        };

        let out = normalize(vec![team("MCL")], 2, &[team("MCL"), team("FER")]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].id, "FER");
        assert_eq!(out[1].position, 2);
    }
}
