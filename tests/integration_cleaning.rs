//! End-to-end tests for cleaning, statistics, quality reporting and search
//! over a realistic station fixture.

use serde_json::Value;
use std::collections::HashSet;
use std::path::PathBuf;

use station_reviews::app::services::station_cleaner::{ValidationIssue, clean_payload};
use station_reviews::app::services::statistics::{
    QualityLevel, build_quality_report, build_sentiment_report,
};
use station_reviews::app::services::station_loader::StationLoader;
use station_reviews::config::LoaderConfig;
use station_reviews::{StationDataset, calculate_stats, clean_stations};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("stations.json")
}

fn fixture_payload() -> Value {
    let contents = std::fs::read_to_string(fixture_path()).unwrap();
    serde_json::from_str(&contents).unwrap()
}

fn fixture_dataset() -> StationDataset {
    StationDataset::from_cleaning(clean_payload(&fixture_payload()).unwrap())
}

#[test]
fn test_fixture_cleaning_counts() {
    let result = clean_payload(&fixture_payload()).unwrap();
    let stats = &result.stats;

    assert_eq!(stats.total_input, 8);
    assert_eq!(stats.valid, 4);
    assert_eq!(stats.invalid, 4);
    assert_eq!(stats.duplicates_removed, 1);
    assert_eq!(stats.unique, 3);

    assert_eq!(stats.rejections_for(ValidationIssue::InvalidLatitude), 2);
    assert_eq!(stats.rejections_for(ValidationIssue::MissingId), 1);
    assert_eq!(stats.rejections_for(ValidationIssue::NotAnObject), 1);
}

#[test]
fn test_fixture_keeps_first_occurrence_in_order() {
    let dataset = fixture_dataset();

    let ids: Vec<&str> = dataset.stations().iter().map(|s| s.key()).collect();
    assert_eq!(ids, vec!["ChIJ-centro", "ChIJ-paulista", "ChIJ-niteroi"]);
    assert_eq!(dataset.stations()[0].name, "Posto Shell Centro");

    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn test_fixture_statistics() {
    let dataset = fixture_dataset();
    let stats = dataset.stats();

    assert_eq!(stats.total_stations, 3);
    assert_eq!(stats.average_rating, 4.25);
    assert_eq!(stats.total_reviews, 4);
    assert_eq!(stats.stations_with_reviews, 2);
    assert_eq!(stats.max_rating, Some(4.6));
    assert_eq!(stats.max_review_count, 3);

    assert_eq!(&calculate_stats(dataset.stations()), stats);
}

#[test]
fn test_fixture_quality_report() {
    let dataset = fixture_dataset();
    let report = build_quality_report(dataset.stations());

    assert_eq!(report.rating_distribution.get(&4), Some(&1));
    assert_eq!(report.rating_distribution.get(&3), Some(&1));
    assert_eq!(report.stations_with_rating, 2);
    assert_eq!(report.business_status_counts["OPERATIONAL"], 2);
    assert_eq!(report.business_status_counts["CLOSED_TEMPORARILY"], 1);
    assert_eq!(report.language_counts["pt"], 3);
    assert_eq!(report.language_counts["en"], 1);
    assert_eq!(report.stations_with_phone, 1);
    assert_eq!(report.stations_with_website, 1);
    assert_eq!(report.bucket("0"), 1);
    assert_eq!(report.bucket("1-5"), 2);

    let assessment = report.assessment();
    assert_eq!(assessment.review_coverage_level, QualityLevel::Good);
    assert_eq!(assessment.reviews_per_station_level, QualityLevel::Low);
    assert_eq!(assessment.operational_rate_level, QualityLevel::Moderate);
    assert_eq!(assessment.overall(), QualityLevel::Low);
}

#[test]
fn test_fixture_sentiment_report() {
    let dataset = fixture_dataset();
    let report = build_sentiment_report(dataset.stations(), 1, 3);

    // The discarded duplicate's one-star review never reaches the analysis
    assert_eq!(report.breakdown.positive, 2);
    assert_eq!(report.breakdown.neutral, 1);
    assert_eq!(report.breakdown.negative, 0);

    let ranked: Vec<(&str, i64)> = report
        .stations
        .iter()
        .map(|s| (s.place_id.as_str(), s.sentiment_score))
        .collect();
    assert_eq!(ranked, vec![("ChIJ-centro", 2), ("ChIJ-paulista", 0)]);
    assert_eq!(report.stations[0].average_rating, 4.5);

    let words: Vec<&str> = report.positive_topics.iter().map(|t| t.word.as_str()).collect();
    assert_eq!(words, vec!["atendimento", "rápido", "banheiro"]);
    assert!(report.negative_topics.is_empty());
}

#[test]
fn test_fixture_search_and_lookup() {
    let dataset = fixture_dataset();

    let shell: Vec<&str> = dataset.search("shell").iter().map(|s| s.key()).collect();
    assert_eq!(shell, vec!["ChIJ-centro", "ChIJ-niteroi"]);

    let sao_paulo = dataset.search("SÃO PAULO");
    assert_eq!(sao_paulo.len(), 1);
    assert_eq!(sao_paulo[0].key(), "ChIJ-paulista");

    assert_eq!(dataset.search("").len(), 3);
    assert!(dataset.search("texaco").is_empty());

    assert!(dataset.find("ChIJ-paulista").is_some());
    assert!(dataset.get_station("ChIJ-sem-latitude").is_err());
}

#[test]
fn test_fixture_review_dates() {
    let dataset = fixture_dataset();
    let review = &dataset.stations()[0].reviews[0];

    assert_eq!(review.formatted_date().as_deref(), Some("Mar 4, 2024"));
    assert!(!dataset.stations()[0].reviews[2].has_text());
}

#[test]
fn test_cleaning_cleaned_output_is_stable() {
    let first = clean_payload(&fixture_payload()).unwrap();
    let reserialized: Vec<Value> = first
        .stations
        .iter()
        .map(|station| station.to_value().unwrap())
        .collect();

    let second = clean_stations(&reserialized).unwrap();

    assert_eq!(second.stations, first.stations);
    assert_eq!(second.stats.removed(), 0);
}

#[tokio::test]
async fn test_loader_reads_fixture_file() {
    let config = LoaderConfig {
        source: fixture_path().display().to_string(),
        ..Default::default()
    };

    let dataset = StationLoader::new(&config).unwrap().load().await.unwrap();

    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.stats().total_reviews, 4);
}
