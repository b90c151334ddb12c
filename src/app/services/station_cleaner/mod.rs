//! Station cleaning module for raw station datasets
//!
//! This module turns the raw station payload into the canonical in-memory dataset.
//! It validates each record's identity and geographic fields, converts the survivors
//! to typed [`StationRecord`](crate::app::models::StationRecord)s, and collapses them to
//! one record per `place_id`.
//!
//! # Architecture
//!
//! - [`validation`] - Per-record well-formedness checks
//! - [`deduplication`] - Stable first-wins deduplication by `place_id`
//! - [`processor`] - Pipeline orchestration and the empty-dataset failure; [`inspect_stations`]
//!   runs the same steps without failing so diagnostics survive an empty outcome
//! - [`stats`] - Cleaning diagnostics and result structures
//!
//! # Processing Pipeline
//!
//! 1. **Validation**: invalid records are dropped silently and counted by reason
//! 2. **Deduplication**: later records sharing a `place_id` are discarded, not merged
//!
//! The pipeline is a pure function of its input: diagnostics are returned in
//! [`CleaningStats`] rather than emitted as side effects, and the output order
//! depends only on the input order.
//!
//! # Example Usage
//!
//! ```rust
//! use serde_json::json;
//! use station_reviews::app::services::station_cleaner::clean_stations;
//!
//! let raw = vec![
//!     json!({"place_id": "a", "name": "Posto A", "latitude": -23.5, "longitude": -46.6}),
//!     json!({"place_id": "a", "name": "Posto A (dup)", "latitude": -23.5, "longitude": -46.6}),
//!     json!({"place_id": "b", "name": "Posto B", "latitude": 120.0, "longitude": 0.0}),
//! ];
//!
//! let result = clean_stations(&raw).unwrap();
//! assert_eq!(result.station_count(), 1);
//! assert_eq!(result.stats.duplicates_removed, 1);
//! assert_eq!(result.stats.invalid, 1);
//! ```

pub mod deduplication;
pub mod processor;
pub mod stats;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use deduplication::{DeduplicationOutcome, DuplicateId, deduplicate_stations};
pub use processor::{clean_payload, clean_stations, inspect_stations};
pub use stats::{CleaningResult, CleaningStats};
pub use validation::{ValidationIssue, check_station, is_valid_station};

// Re-export utility functions that might be useful externally
pub use deduplication::{are_duplicates, find_duplicate_ids, get_deduplication_metrics};
