//! Headline statistics for the dashboard
//!
//! The embedded review list is authoritative for review counts; the advertised
//! `user_ratings_total` is never summed.

use crate::app::models::StationRecord;
use crate::constants::RATING_DECIMALS;
use serde::Serialize;

/// Summary metrics over a cleaned dataset
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DatasetStats {
    /// Number of stations
    pub total_stations: usize,
    /// Mean rating over stations with a positive rating, rounded to 2 decimals
    pub average_rating: f64,
    /// Sum of embedded review list lengths
    pub total_reviews: usize,
    /// Stations with at least one embedded review
    pub stations_with_reviews: usize,
    /// Highest rating present ("top rated")
    pub max_rating: Option<f64>,
    /// Longest embedded review list ("most reviews")
    pub max_review_count: usize,
}

impl DatasetStats {
    /// Average embedded reviews per station
    pub fn reviews_per_station(&self) -> f64 {
        if self.total_stations == 0 {
            0.0
        } else {
            self.total_reviews as f64 / self.total_stations as f64
        }
    }

    /// Percentage of stations with at least one review
    pub fn review_coverage(&self) -> f64 {
        if self.total_stations == 0 {
            0.0
        } else {
            (self.stations_with_reviews as f64 / self.total_stations as f64) * 100.0
        }
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "{} stations | avg rating {:.2} | {} reviews across {} stations",
            self.total_stations, self.average_rating, self.total_reviews, self.stations_with_reviews
        )
    }
}

/// Compute summary statistics over cleaned stations
///
/// An empty slice yields all-zero statistics rather than an error.
pub fn calculate_stats(stations: &[StationRecord]) -> DatasetStats {
    if stations.is_empty() {
        return DatasetStats::default();
    }

    let (rating_sum, rated_count) = stations
        .iter()
        .filter_map(StationRecord::effective_rating)
        .fold((0.0_f64, 0_usize), |(sum, count), rating| {
            (sum + rating, count + 1)
        });

    let average_rating = if rated_count > 0 {
        round_rating(rating_sum / rated_count as f64)
    } else {
        0.0
    };

    let total_reviews = stations.iter().map(StationRecord::review_count).sum();
    let stations_with_reviews = stations.iter().filter(|s| s.has_reviews()).count();

    let max_rating = stations
        .iter()
        .filter_map(|s| s.rating)
        .fold(None, |max: Option<f64>, rating| {
            Some(max.map_or(rating, |current| current.max(rating)))
        });

    let max_review_count = stations
        .iter()
        .map(StationRecord::review_count)
        .max()
        .unwrap_or(0);

    DatasetStats {
        total_stations: stations.len(),
        average_rating,
        total_reviews,
        stations_with_reviews,
        max_rating,
        max_review_count,
    }
}

/// Round to the dashboard's rating precision, half away from zero
pub fn round_rating(value: f64) -> f64 {
    let factor = 10_f64.powi(RATING_DECIMALS);
    (value * factor).round() / factor
}
