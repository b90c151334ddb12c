//! Tests for station deduplication functionality

use super::*;
use crate::app::services::station_cleaner::deduplication::{
    DuplicateId, are_duplicates, deduplicate_stations, find_duplicate_ids,
    get_deduplication_metrics,
};

#[test]
fn test_deduplicate_stations_no_duplicates() {
    let stations = vec![
        create_test_station("a", "Posto A"),
        create_test_station("b", "Posto B"),
        create_test_station("c", "Posto C"),
    ];

    let outcome = deduplicate_stations(stations.clone());

    assert_eq!(outcome.stations, stations);
    assert_eq!(outcome.duplicates_removed, 0);
}

#[test]
fn test_deduplicate_stations_keeps_first_occurrence() {
    let first = create_rated_station("a", Some(4.0), 2);
    let mut later = create_rated_station("a", Some(1.0), 5);
    later.name = "Posto A (updated)".to_string();

    let outcome = deduplicate_stations(vec![first.clone(), later]);

    assert_eq!(outcome.stations.len(), 1);
    assert_eq!(outcome.stations[0], first);
    assert_eq!(outcome.stations[0].review_count(), 2);
    assert_eq!(outcome.duplicates_removed, 1);
}

#[test]
fn test_deduplicate_stations_preserves_input_order() {
    let stations = vec![
        create_test_station("c", "Posto C"),
        create_test_station("a", "Posto A"),
        create_test_station("c", "Posto C bis"),
        create_test_station("b", "Posto B"),
        create_test_station("a", "Posto A bis"),
    ];

    let outcome = deduplicate_stations(stations);
    let ids: Vec<&str> = outcome.stations.iter().map(|s| s.key()).collect();

    assert_eq!(ids, vec!["c", "a", "b"]);
    assert_eq!(outcome.stations[0].name, "Posto C");
    assert_eq!(outcome.stations[1].name, "Posto A");
    assert_eq!(outcome.duplicates_removed, 2);
}

#[test]
fn test_deduplicate_stations_does_not_merge_fields() {
    let mut first = create_test_station("a", "Posto A");
    first.phone_number = None;
    let mut later = create_test_station("a", "Posto A");
    later.phone_number = Some("(11) 5555-0000".to_string());

    let outcome = deduplicate_stations(vec![first, later]);

    assert!(outcome.stations[0].phone_number.is_none());
}

#[test]
fn test_deduplicate_stations_empty_input() {
    let outcome = deduplicate_stations(Vec::new());
    assert!(outcome.stations.is_empty());
    assert_eq!(outcome.duplicates_removed, 0);
}

#[test]
fn test_duplicates_removed_matches_length_difference() {
    let stations: Vec<StationRecord> = ["a", "b", "a", "a", "c", "b"]
        .iter()
        .map(|id| create_test_station(id, "Posto"))
        .collect();
    let input_len = stations.len();

    let outcome = deduplicate_stations(stations);

    assert_eq!(outcome.duplicates_removed, input_len - outcome.stations.len());
    assert_eq!(outcome.duplicates_removed, 3);
}

#[test]
fn test_are_duplicates() {
    let a1 = create_test_station("a", "Posto A");
    let a2 = create_test_station("a", "Different name");
    let b = create_test_station("b", "Posto A");

    assert!(are_duplicates(&a1, &a2));
    assert!(!are_duplicates(&a1, &b));
}

#[test]
fn test_find_duplicate_ids() {
    let stations: Vec<StationRecord> = ["x", "a", "b", "a", "x", "a"]
        .iter()
        .map(|id| create_test_station(id, "Posto"))
        .collect();

    let duplicates = find_duplicate_ids(&stations);

    let summary: Vec<(&str, usize)> = duplicates
        .iter()
        .map(|d| (d.place_id.as_str(), d.occurrences))
        .collect();
    assert_eq!(summary, vec![("x", 2), ("a", 3)]);
}

#[test]
fn test_deduplicate_reports_collapsed_ids() {
    let stations = vec![
        create_test_station("a", "Posto A"),
        create_test_station("b", "Posto B"),
        create_test_station("a", "Posto A (copy)"),
    ];

    let outcome = deduplicate_stations(stations);

    assert_eq!(
        outcome.duplicate_ids,
        vec![DuplicateId {
            place_id: "a".to_string(),
            occurrences: 2
        }]
    );
    assert_eq!(outcome.duplicates_removed, 1);
}

#[test]
fn test_get_deduplication_metrics() {
    let (percentage, removed) = get_deduplication_metrics(200, 150);
    assert_eq!(removed, 50);
    assert_eq!(percentage, 25.0);

    let (percentage, removed) = get_deduplication_metrics(0, 0);
    assert_eq!(removed, 0);
    assert_eq!(percentage, 0.0);
}
