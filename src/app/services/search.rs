//! Station search over a cleaned dataset
//!
//! Matching is a plain case-insensitive substring test on `name` and `address`.
//! The term is not trimmed, and results keep the dataset order.

use crate::app::models::StationRecord;

/// Stations whose name or address contains `term`, ignoring case
///
/// An empty term matches every station.
///
/// # Examples
/// ```
/// # use serde_json::json;
/// # use station_reviews::StationRecord;
/// # use station_reviews::app::services::search::filter_stations;
/// let stations = vec![StationRecord::from_value(json!({
///     "place_id": "a", "name": "Posto Shell", "address": "Rua Augusta, 10",
///     "latitude": -23.5, "longitude": -46.6
/// })).unwrap()];
///
/// assert_eq!(filter_stations(&stations, "SHELL").len(), 1);
/// assert_eq!(filter_stations(&stations, "augusta").len(), 1);
/// assert!(filter_stations(&stations, "ipiranga").is_empty());
/// ```
pub fn filter_stations<'a>(stations: &'a [StationRecord], term: &str) -> Vec<&'a StationRecord> {
    if term.is_empty() {
        return stations.iter().collect();
    }

    let term_lower = term.to_lowercase();
    stations
        .iter()
        .filter(|station| {
            station.name.to_lowercase().contains(&term_lower)
                || station.address.to_lowercase().contains(&term_lower)
        })
        .collect()
}

/// Find a station by its `place_id`
pub fn find_station<'a>(
    stations: &'a [StationRecord],
    place_id: &str,
) -> Option<&'a StationRecord> {
    stations.iter().find(|station| station.place_id == place_id)
}
