//! Data models for station review datasets
//!
//! This module contains the core data structures for representing gas stations,
//! their embedded customer reviews, and the cleaned dataset handed to the dashboard.
//! Serde field names mirror the raw JSON payload exactly; they are the external
//! contract and must not be renamed.

pub mod lenient;

use crate::app::services::search;
use crate::app::services::station_cleaner::{CleaningResult, CleaningStats};
use crate::app::services::statistics::{DatasetStats, calculate_stats};
use crate::constants::{OPERATIONAL_STATUS, REVIEW_DATE_FORMAT};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Review Record Structure
// =============================================================================

/// One customer review attached to a station
///
/// Every field is tolerant of missing or mistyped input: a review is display
/// data and never decides whether its station is kept. Unknown keys such as
/// `review_date` are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ReviewRecord {
    /// Display name of the reviewer
    #[serde(default, deserialize_with = "lenient::string")]
    pub author_name: String,

    /// Star rating given by the reviewer (0-5)
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub rating: f64,

    /// Review body, may be empty
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: String,

    /// Human-readable age of the review (e.g. "2 months ago"), opaque
    #[serde(default, deserialize_with = "lenient::string")]
    pub relative_time_description: String,

    /// Publication time in seconds since the Unix epoch
    #[serde(
        default,
        deserialize_with = "lenient::option_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<i64>,

    /// Language tag of the review text
    #[serde(
        default,
        deserialize_with = "lenient::option_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub language: Option<String>,

    /// Any other keys present in the source review
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ReviewRecord {
    /// Publication time as a UTC timestamp
    ///
    /// Zero and negative times are placeholders for "unknown" and yield `None`.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.time
            .filter(|seconds| *seconds > 0)
            .and_then(|seconds| DateTime::<Utc>::from_timestamp(seconds, 0))
    }

    /// Publication date formatted for display (e.g. "Mar 4, 2024")
    pub fn formatted_date(&self) -> Option<String> {
        self.published_at()
            .map(|timestamp| timestamp.format(REVIEW_DATE_FORMAT).to_string())
    }

    /// Check whether the review carries any text
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

// =============================================================================
// Station Record Structure
// =============================================================================

/// One physical gas station with its embedded reviews
///
/// Instances are built once from a validated raw record and are not mutated
/// afterwards. Fields the core does not inspect are kept as pass-through data;
/// unknown keys land in `extra` so re-serialization loses nothing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StationRecord {
    /// Stable external identifier - uniqueness key for deduplication
    #[serde(deserialize_with = "lenient::string")]
    pub place_id: String,

    /// Station display name
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,

    /// Street address, empty when the source omits it
    #[serde(default, deserialize_with = "lenient::string")]
    pub address: String,

    /// Latitude in WGS84 decimal degrees
    pub latitude: f64,

    /// Longitude in WGS84 decimal degrees
    pub longitude: f64,

    /// Average rating (0-5); absent means "no rating"
    #[serde(
        default,
        deserialize_with = "lenient::option_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<f64>,

    /// Advertised total number of ratings, independent of `reviews.len()`
    #[serde(
        default,
        deserialize_with = "lenient::option_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_ratings_total: Option<u64>,

    /// Embedded reviews in source order (not guaranteed chronological)
    #[serde(default, deserialize_with = "lenient::reviews")]
    pub reviews: Vec<ReviewRecord>,

    #[serde(
        default,
        deserialize_with = "lenient::option_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone_number: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::option_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub website: Option<String>,

    /// Operating status (e.g. "OPERATIONAL", "CLOSED_TEMPORARILY")
    #[serde(
        default,
        deserialize_with = "lenient::option_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub business_status: Option<String>,

    /// Price tier (0-4)
    #[serde(
        default,
        deserialize_with = "lenient::option_u8",
        skip_serializing_if = "Option::is_none"
    )]
    pub price_level: Option<u8>,

    /// Any other keys present in the source record
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StationRecord {
    /// Build a station from an already-validated raw record
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| Error::json("Failed to convert raw station record", e))
    }

    /// Convert back to the raw JSON shape
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| Error::json("Failed to serialize station", e))
    }

    /// Stable key for list rendering and lookups
    pub fn key(&self) -> &str {
        &self.place_id
    }

    /// Get station location as (latitude, longitude) tuple
    pub fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Rating counted towards the average: present and strictly positive
    pub fn effective_rating(&self) -> Option<f64> {
        self.rating.filter(|rating| *rating > 0.0)
    }

    /// Number of embedded reviews (authoritative over `user_ratings_total`)
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    pub fn has_reviews(&self) -> bool {
        !self.reviews.is_empty()
    }

    /// Check whether the station reports itself as operational
    pub fn is_operational(&self) -> bool {
        self.business_status.as_deref() == Some(OPERATIONAL_STATUS)
    }
}

// =============================================================================
// Cleaned Dataset
// =============================================================================

/// The canonical in-memory dataset consumed by the dashboard
///
/// Holds the cleaned stations together with their aggregate statistics and the
/// diagnostics of the cleaning pass. Only shared borrows are handed out, so the
/// dataset stays immutable for the rest of the session.
#[derive(Debug, Clone)]
pub struct StationDataset {
    stations: Vec<StationRecord>,
    stats: DatasetStats,
    cleaning: CleaningStats,
}

impl StationDataset {
    /// Create a dataset from a successful cleaning pass
    pub fn from_cleaning(result: CleaningResult) -> Self {
        let stats = calculate_stats(&result.stations);
        Self {
            stations: result.stations,
            stats,
            cleaning: result.stats,
        }
    }

    pub fn stations(&self) -> &[StationRecord] {
        &self.stations
    }

    pub fn stats(&self) -> &DatasetStats {
        &self.stats
    }

    /// Diagnostics from the cleaning pass that produced this dataset
    pub fn cleaning_stats(&self) -> &CleaningStats {
        &self.cleaning
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Stations whose name or address contains `term` (case-insensitive)
    pub fn search(&self, term: &str) -> Vec<&StationRecord> {
        search::filter_stations(&self.stations, term)
    }

    /// Look up a station by `place_id`
    pub fn find(&self, place_id: &str) -> Option<&StationRecord> {
        search::find_station(&self.stations, place_id)
    }

    /// Look up a station by `place_id`, failing if it is absent
    pub fn get_station(&self, place_id: &str) -> Result<&StationRecord> {
        self.find(place_id)
            .ok_or_else(|| Error::station_not_found(place_id))
    }
}
