//! Aggregate statistics over cleaned station datasets
//!
//! - [`summary`] - Headline dashboard figures (count, average rating, review totals)
//! - [`distribution`] - Data-quality breakdowns (rating buckets, review coverage,
//!   business status) and a coarse quality assessment
//! - [`sentiment`] - Rating-based review sentiment, station ranking and key topics
//!
//! All of them operate on the cleaned dataset only and perform no I/O.

pub mod distribution;
pub mod sentiment;
pub mod summary;

pub use distribution::{QualityAssessment, QualityLevel, QualityReport, build_quality_report};
pub use sentiment::{
    Sentiment, SentimentBreakdown, SentimentReport, StationSentiment, TopicCount,
    analyze_by_station, build_sentiment_report, extract_key_topics, sentiment_breakdown,
};
pub use summary::{DatasetStats, calculate_stats, round_rating};
