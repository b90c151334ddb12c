//! Station deduplication by `place_id`
//!
//! Deduplication is stable and first-wins: the earliest record for each `place_id`
//! is kept in its original position and later records sharing the id are discarded
//! without merging any of their fields.

use crate::app::models::StationRecord;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// A `place_id` that occurred more than once among validated records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateId {
    pub place_id: String,
    /// Occurrences including the kept first one
    pub occurrences: usize,
}

/// Result of a deduplication pass
#[derive(Debug, Clone, PartialEq)]
pub struct DeduplicationOutcome {
    /// Unique stations in input order
    pub stations: Vec<StationRecord>,
    /// Number of records discarded as duplicates (`input - output`)
    pub duplicates_removed: usize,
    /// Ids that were collapsed, in first-seen order
    pub duplicate_ids: Vec<DuplicateId>,
}

/// Collapse stations to one per `place_id`, keeping the first occurrence
///
/// # Arguments
///
/// * `stations` - Validated stations in source order
///
/// # Returns
///
/// The unique stations together with the number of duplicates removed and the
/// ids they shared
pub fn deduplicate_stations(stations: Vec<StationRecord>) -> DeduplicationOutcome {
    let input_count = stations.len();
    let duplicate_ids = find_duplicate_ids(&stations);
    let mut seen: HashSet<String> = HashSet::with_capacity(input_count);
    let mut unique = Vec::with_capacity(input_count);

    for station in stations {
        if seen.contains(&station.place_id) {
            debug!(
                "Discarding duplicate station {} ('{}')",
                station.place_id, station.name
            );
            continue;
        }
        seen.insert(station.place_id.clone());
        unique.push(station);
    }

    let duplicates_removed = input_count - unique.len();

    DeduplicationOutcome {
        stations: unique,
        duplicates_removed,
        duplicate_ids,
    }
}

/// Check if two stations are considered duplicates
pub fn are_duplicates(a: &StationRecord, b: &StationRecord) -> bool {
    a.place_id == b.place_id
}

/// Find ids that occur more than once, with their occurrence counts
///
/// Ids are returned in the order they were first seen.
pub fn find_duplicate_ids(stations: &[StationRecord]) -> Vec<DuplicateId> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for station in stations {
        let count = counts.entry(station.place_id.as_str()).or_insert(0);
        if *count == 0 {
            order.push(station.place_id.as_str());
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter_map(|id| {
            let occurrences = counts[id];
            (occurrences > 1).then(|| DuplicateId {
                place_id: id.to_string(),
                occurrences,
            })
        })
        .collect()
}

/// Get deduplication metrics
///
/// # Arguments
///
/// * `input_count` - Number of stations before deduplication
/// * `output_count` - Number of stations after deduplication
///
/// # Returns
///
/// Tuple of (reduction_percentage, duplicates_removed)
pub fn get_deduplication_metrics(input_count: usize, output_count: usize) -> (f64, usize) {
    let duplicates_removed = input_count.saturating_sub(output_count);
    let reduction_percentage = if input_count > 0 {
        (duplicates_removed as f64 / input_count as f64) * 100.0
    } else {
        0.0
    };

    (reduction_percentage, duplicates_removed)
}
