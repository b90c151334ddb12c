//! Cleaning pipeline orchestration
//!
//! Composes validation and deduplication into one pass over the raw input. The
//! pass either produces a non-empty dataset or fails as a whole; no partial
//! dataset is ever returned.

use crate::app::models::StationRecord;
use crate::{Error, Result};
use serde_json::Value;
use tracing::{debug, info};

use super::{
    deduplication::deduplicate_stations,
    stats::{CleaningResult, CleaningStats},
    validation::check_station,
};

/// Clean a raw JSON payload
///
/// The payload must be a non-empty array; anything else is reported as an
/// empty dataset.
///
/// # Errors
///
/// Returns `Error::EmptyDataset` if the payload is not a non-empty array or no
/// station survives cleaning.
pub fn clean_payload(payload: &Value) -> Result<CleaningResult> {
    match payload.as_array() {
        Some(records) => clean_stations(records),
        None => {
            debug!("Raw payload is not an array, nothing to clean");
            Err(Error::empty_dataset(0, 0, 0))
        }
    }
}

/// Clean a sequence of raw station records
///
/// Runs [`inspect_stations`] and rejects an empty outcome.
///
/// # Arguments
///
/// * `raw_records` - Raw station objects in source order
///
/// # Returns
///
/// A `CleaningResult` containing the cleaned stations and statistics
///
/// # Errors
///
/// Returns `Error::EmptyDataset` when the input is empty or nothing survives
/// validation and deduplication.
pub fn clean_stations(raw_records: &[Value]) -> Result<CleaningResult> {
    let result = inspect_stations(raw_records)?;

    if result.stations.is_empty() {
        return Err(result.stats.empty_dataset_error());
    }

    info!(
        "Station cleaning complete: {} original, {} valid, {} unique, {} removed",
        result.stats.total_input,
        result.stats.valid,
        result.stats.unique,
        result.stats.removed()
    );

    Ok(result)
}

/// Run validation and deduplication, keeping the diagnostics even when
/// nothing survives
///
/// Steps, in order:
/// 1. Validate each record, dropping invalid ones and counting them by reason
/// 2. Convert valid records to [`StationRecord`]
/// 3. Deduplicate by `place_id`, keeping the first occurrence
///
/// Validation runs before deduplication, so an invalid first copy of an id
/// never shadows a valid later one.
pub fn inspect_stations(raw_records: &[Value]) -> Result<CleaningResult> {
    let mut stats = CleaningStats::new();
    stats.total_input = raw_records.len();

    // Step 1 + 2: validate and convert
    let mut valid_stations = Vec::with_capacity(raw_records.len());
    for (index, record) in raw_records.iter().enumerate() {
        if let Err(issue) = check_station(record) {
            debug!("Dropping raw record {}: {}", index, issue);
            stats.add_rejection(issue);
            continue;
        }

        valid_stations.push(StationRecord::from_value(record.clone())?);
    }
    stats.valid = valid_stations.len();

    // Step 3: deduplicate
    let outcome = deduplicate_stations(valid_stations);
    stats.duplicates_removed = outcome.duplicates_removed;
    stats.duplicate_ids = outcome.duplicate_ids;
    stats.unique = outcome.stations.len();

    Ok(CleaningResult::new(outcome.stations, stats))
}
