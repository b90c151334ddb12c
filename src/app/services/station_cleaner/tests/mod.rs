//! Tests for the station cleaning module
//!
//! This module provides unit tests for all cleaning components plus shared fixtures.

pub mod deduplication_tests;

// Test helper functions and fixtures
use crate::app::models::{ReviewRecord, StationRecord};
use serde_json::{Value, json};

/// Create a raw station record with valid identity and coordinates
pub fn create_raw_station(place_id: &str, name: &str) -> Value {
    json!({
        "place_id": place_id,
        "name": name,
        "address": format!("Rua {name}, 100 - São Paulo"),
        "latitude": -23.55,
        "longitude": -46.63,
        "rating": 4.2,
        "user_ratings_total": 120,
        "business_status": "OPERATIONAL",
        "reviews": []
    })
}

/// Create a raw station record carrying `review_count` embedded reviews
pub fn create_raw_station_with_reviews(place_id: &str, review_count: usize) -> Value {
    let reviews: Vec<Value> = (0..review_count)
        .map(|i| {
            json!({
                "author_name": format!("Reviewer {i}"),
                "rating": 4,
                "text": "Bom posto",
                "relative_time_description": "a month ago",
                "time": 1_700_000_000 + i as i64,
                "language": "pt"
            })
        })
        .collect();

    let mut station = create_raw_station(place_id, &format!("Posto {place_id}"));
    station["reviews"] = Value::Array(reviews);
    station
}

/// Create a typed station for deduplication and statistics tests
pub fn create_test_station(place_id: &str, name: &str) -> StationRecord {
    StationRecord::from_value(create_raw_station(place_id, name))
        .expect("fixture station should convert")
}

/// Create a typed station with a given rating and review count
pub fn create_rated_station(place_id: &str, rating: Option<f64>, reviews: usize) -> StationRecord {
    let mut station = create_test_station(place_id, &format!("Posto {place_id}"));
    station.rating = rating;
    station.reviews = (0..reviews)
        .map(|i| ReviewRecord {
            author_name: format!("Reviewer {i}"),
            rating: 5.0,
            ..Default::default()
        })
        .collect();
    station
}
