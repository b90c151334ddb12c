//! Data-quality breakdowns over a cleaned dataset
//!
//! Where [`super::summary`] answers "what does the dashboard show", this module
//! answers "how complete is the data": how ratings spread over the star scale,
//! how many reviews each station carries, which business statuses and review
//! languages occur, and how many stations have contact details.

use crate::app::models::StationRecord;
use crate::constants::quality_thresholds::{
    OPERATIONAL_RATE, REVIEW_COVERAGE, REVIEWS_PER_STATION,
};
use crate::constants::{REVIEW_COUNT_BUCKETS, UNKNOWN_BUSINESS_STATUS, UNKNOWN_LANGUAGE};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Coarse quality grade for a single metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum QualityLevel {
    Low,
    Moderate,
    Good,
}

impl QualityLevel {
    /// Grade a value against `(good, moderate)` thresholds, both exclusive
    pub fn grade(value: f64, (good, moderate): (f64, f64)) -> Self {
        if value > good {
            Self::Good
        } else if value > moderate {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Graded quality metrics with the ratios they were computed from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityAssessment {
    /// Share of stations with at least one embedded review (0-1)
    pub review_coverage: f64,
    pub review_coverage_level: QualityLevel,
    /// Embedded reviews per station
    pub reviews_per_station: f64,
    pub reviews_per_station_level: QualityLevel,
    /// Share of stations reported as operational (0-1)
    pub operational_rate: f64,
    pub operational_rate_level: QualityLevel,
}

impl QualityAssessment {
    /// Worst grade across all metrics
    pub fn overall(&self) -> QualityLevel {
        self.review_coverage_level
            .min(self.reviews_per_station_level)
            .min(self.operational_rate_level)
    }
}

/// Number of stations whose review list falls in a bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketCount {
    pub label: &'static str,
    pub count: usize,
}

/// Data-quality report over a cleaned dataset
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct QualityReport {
    pub total_stations: usize,
    /// Whole-star bucket (floor of the rating) to station count, positive ratings only
    pub rating_distribution: BTreeMap<u8, usize>,
    /// Review list sizes grouped into fixed buckets, in display order
    pub review_count_distribution: Vec<BucketCount>,
    pub business_status_counts: BTreeMap<String, usize>,
    /// Review language to review count
    pub language_counts: BTreeMap<String, usize>,
    pub total_reviews: usize,
    pub stations_with_reviews: usize,
    pub stations_with_rating: usize,
    pub stations_with_phone: usize,
    pub stations_with_website: usize,
    pub operational_stations: usize,
}

impl QualityReport {
    /// Grade review coverage, review density and operational rate
    pub fn assessment(&self) -> QualityAssessment {
        let review_coverage = self.ratio(self.stations_with_reviews);
        let reviews_per_station = self.ratio(self.total_reviews);
        let operational_rate = self.ratio(self.operational_stations);

        QualityAssessment {
            review_coverage,
            review_coverage_level: QualityLevel::grade(review_coverage, REVIEW_COVERAGE),
            reviews_per_station,
            reviews_per_station_level: QualityLevel::grade(
                reviews_per_station,
                REVIEWS_PER_STATION,
            ),
            operational_rate,
            operational_rate_level: QualityLevel::grade(operational_rate, OPERATIONAL_RATE),
        }
    }

    /// Count for a review bucket label, zero for unknown labels
    pub fn bucket(&self, label: &str) -> usize {
        self.review_count_distribution
            .iter()
            .find(|bucket| bucket.label == label)
            .map_or(0, |bucket| bucket.count)
    }

    fn ratio(&self, count: usize) -> f64 {
        if self.total_stations == 0 {
            0.0
        } else {
            count as f64 / self.total_stations as f64
        }
    }
}

/// Build the data-quality report for a set of stations
pub fn build_quality_report(stations: &[StationRecord]) -> QualityReport {
    let mut report = QualityReport {
        total_stations: stations.len(),
        review_count_distribution: REVIEW_COUNT_BUCKETS
            .iter()
            .map(|label| BucketCount {
                label: *label,
                count: 0,
            })
            .collect(),
        ..Default::default()
    };

    for station in stations {
        if let Some(rating) = station.effective_rating() {
            report.stations_with_rating += 1;
            let star = rating.floor().clamp(0.0, u8::MAX as f64) as u8;
            *report.rating_distribution.entry(star).or_insert(0) += 1;
        }

        let review_count = station.review_count();
        report.total_reviews += review_count;
        if review_count > 0 {
            report.stations_with_reviews += 1;
        }
        report.review_count_distribution[review_bucket_index(review_count)].count += 1;

        for review in &station.reviews {
            let language = review.language.as_deref().unwrap_or(UNKNOWN_LANGUAGE);
            *report.language_counts.entry(language.to_string()).or_insert(0) += 1;
        }

        let status = station
            .business_status
            .as_deref()
            .unwrap_or(UNKNOWN_BUSINESS_STATUS);
        *report
            .business_status_counts
            .entry(status.to_string())
            .or_insert(0) += 1;
        if station.is_operational() {
            report.operational_stations += 1;
        }

        if has_value(&station.phone_number) {
            report.stations_with_phone += 1;
        }
        if has_value(&station.website) {
            report.stations_with_website += 1;
        }
    }

    report
}

// Index into REVIEW_COUNT_BUCKETS
fn review_bucket_index(review_count: usize) -> usize {
    match review_count {
        0 => 0,
        1..=5 => 1,
        6..=10 => 2,
        11..=20 => 3,
        _ => 4,
    }
}

fn has_value(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.is_empty())
}
