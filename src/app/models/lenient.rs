//! Tolerant field deserializers for raw station payloads
//!
//! Only identity and geographic fields decide whether a station is kept; those
//! are checked by the validator before conversion. Everything else goes through
//! these helpers, which map missing or mistyped values to "absent" instead of
//! failing the whole record.

use super::ReviewRecord;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// String value, or empty when not a string
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

pub fn option_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

pub fn option_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|number| !number.is_nan()))
}

pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(option_f64(deserializer)?.unwrap_or(0.0))
}

/// Non-negative integer; whole floats such as `812.0` are accepted
pub fn option_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|number| *number >= 0.0 && number.fract() == 0.0 && *number <= u64::MAX as f64)
            .map(|number| number as u64)
    }))
}

/// Signed integer; fractional seconds are truncated
pub fn option_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|number| number.is_finite())
            .filter(|number| *number >= i64::MIN as f64 && *number <= i64::MAX as f64)
            .map(|number| number.trunc() as i64)
    }))
}

pub fn option_u8<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(option_u64(deserializer)?.and_then(|number| u8::try_from(number).ok()))
}

/// Review list; a non-array becomes empty and a malformed element becomes a
/// default review so the embedded count matches the source array length
pub fn reviews<'de, D>(deserializer: D) -> Result<Vec<ReviewRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|item| serde_json::from_value::<ReviewRecord>(item).unwrap_or_default())
            .collect()),
        _ => Ok(Vec::new()),
    }
}
