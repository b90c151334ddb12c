//! Structural validation of raw station records
//!
//! A station is displayable when it has an identity (`place_id`, `name`) and a
//! position on the map. Rating, reviews and descriptive fields are never
//! load-bearing here; their absence does not invalidate a record.

use crate::constants::{bounds, fields};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Reason a raw record was rejected, in the order the rules are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ValidationIssue {
    /// Record is null or not a JSON object
    NotAnObject,
    /// `place_id` missing, empty or not a string
    MissingId,
    /// `name` missing, empty or not a string
    MissingName,
    /// `latitude` missing, non-numeric, NaN or outside [-90, 90]
    InvalidLatitude,
    /// `longitude` missing, non-numeric, NaN or outside [-180, 180]
    InvalidLongitude,
}

impl ValidationIssue {
    /// All issues in check order
    pub const ALL: [ValidationIssue; 5] = [
        ValidationIssue::NotAnObject,
        ValidationIssue::MissingId,
        ValidationIssue::MissingName,
        ValidationIssue::InvalidLatitude,
        ValidationIssue::InvalidLongitude,
    ];

    /// Get a human-readable description of the issue
    pub fn description(&self) -> &'static str {
        match self {
            ValidationIssue::NotAnObject => "record is not an object",
            ValidationIssue::MissingId => "missing or empty place_id",
            ValidationIssue::MissingName => "missing or empty name",
            ValidationIssue::InvalidLatitude => "latitude missing or outside [-90, 90]",
            ValidationIssue::InvalidLongitude => "longitude missing or outside [-180, 180]",
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Check a raw record and report the first rule it breaks
pub fn check_station(record: &Value) -> Result<(), ValidationIssue> {
    let Some(object) = record.as_object() else {
        return Err(ValidationIssue::NotAnObject);
    };

    if !is_non_empty_string(object.get(fields::PLACE_ID)) {
        return Err(ValidationIssue::MissingId);
    }

    if !is_non_empty_string(object.get(fields::NAME)) {
        return Err(ValidationIssue::MissingName);
    }

    if !is_coordinate_in_range(
        object.get(fields::LATITUDE),
        bounds::MIN_LATITUDE,
        bounds::MAX_LATITUDE,
    ) {
        return Err(ValidationIssue::InvalidLatitude);
    }

    if !is_coordinate_in_range(
        object.get(fields::LONGITUDE),
        bounds::MIN_LONGITUDE,
        bounds::MAX_LONGITUDE,
    ) {
        return Err(ValidationIssue::InvalidLongitude);
    }

    Ok(())
}

/// Decide whether a raw record is well-formed enough to display
pub fn is_valid_station(record: &Value) -> bool {
    check_station(record).is_ok()
}

fn is_non_empty_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.is_empty())
}

fn is_coordinate_in_range(value: Option<&Value>, min: f64, max: f64) -> bool {
    match value {
        Some(Value::Number(number)) => number
            .as_f64()
            .is_some_and(|coordinate| !coordinate.is_nan() && (min..=max).contains(&coordinate)),
        _ => false,
    }
}
