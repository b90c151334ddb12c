//! Rating-based review sentiment
//!
//! Reviews are classified by their star rating alone: four stars or more is
//! positive, two or fewer is negative, anything in between is neutral. Only
//! reviews with a few words of text take part, so the station ranking and the
//! topic lists describe what customers actually wrote about.

use crate::app::models::{ReviewRecord, StationRecord};
use crate::constants::{
    MAX_IGNORED_WORD_CHARS, MIN_REVIEW_TEXT_CHARS, NEGATIVE_REVIEW_RATING,
    POSITIVE_REVIEW_RATING, TOPIC_STOP_WORDS,
};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Sentiment class of a single review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Classify a review by its star rating
    pub fn from_rating(rating: f64) -> Self {
        if rating >= POSITIVE_REVIEW_RATING {
            Self::Positive
        } else if rating <= NEGATIVE_REVIEW_RATING {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check whether a review carries enough text to be analysed
pub fn is_analyzable(review: &ReviewRecord) -> bool {
    review.text.chars().count() > MIN_REVIEW_TEXT_CHARS
}

/// Counts of analysable reviews per sentiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SentimentBreakdown {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentBreakdown {
    fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Share of reviews with the given sentiment (0-1)
    pub fn ratio(&self, sentiment: Sentiment) -> f64 {
        let count = match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        };
        match self.total() {
            0 => 0.0,
            total => count as f64 / total as f64,
        }
    }

    /// Positive minus negative reviews
    pub fn score(&self) -> i64 {
        self.positive as i64 - self.negative as i64
    }
}

/// Tally the sentiment of every analysable review in a set of stations
pub fn sentiment_breakdown(stations: &[StationRecord]) -> SentimentBreakdown {
    let mut breakdown = SentimentBreakdown::default();
    for review in stations.iter().flat_map(analyzable_reviews) {
        breakdown.record(Sentiment::from_rating(review.rating));
    }
    breakdown
}

/// Sentiment figures for one station
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationSentiment {
    pub place_id: String,
    pub name: String,
    pub address: String,
    /// Analysable reviews only
    pub total_reviews: usize,
    /// Mean star rating of the analysable reviews
    pub average_rating: f64,
    pub positive_reviews: usize,
    pub neutral_reviews: usize,
    pub negative_reviews: usize,
    pub positive_ratio: f64,
    pub negative_ratio: f64,
    /// Positive minus negative reviews
    pub sentiment_score: i64,
}

/// Rank stations by sentiment score, best first
///
/// Stations with fewer than `min_reviews` analysable reviews (and stations with
/// none at all) are left out. Ties keep dataset order.
pub fn analyze_by_station(stations: &[StationRecord], min_reviews: usize) -> Vec<StationSentiment> {
    let mut ranked: Vec<StationSentiment> = stations
        .iter()
        .filter_map(|station| {
            let reviews: Vec<&ReviewRecord> = analyzable_reviews(station).collect();
            if reviews.is_empty() || reviews.len() < min_reviews {
                return None;
            }

            let mut breakdown = SentimentBreakdown::default();
            for review in &reviews {
                breakdown.record(Sentiment::from_rating(review.rating));
            }
            let rating_sum: f64 = reviews.iter().map(|review| review.rating).sum();

            Some(StationSentiment {
                place_id: station.place_id.clone(),
                name: station.name.clone(),
                address: station.address.clone(),
                total_reviews: reviews.len(),
                average_rating: rating_sum / reviews.len() as f64,
                positive_reviews: breakdown.positive,
                neutral_reviews: breakdown.neutral,
                negative_reviews: breakdown.negative,
                positive_ratio: breakdown.ratio(Sentiment::Positive),
                negative_ratio: breakdown.ratio(Sentiment::Negative),
                sentiment_score: breakdown.score(),
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.sentiment_score.cmp(&a.sentiment_score));
    ranked
}

/// A word and how often it occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicCount {
    pub word: String,
    pub count: usize,
}

/// Most frequent words in reviews of one sentiment
///
/// Text is lower-cased and punctuation becomes whitespace. Words of two
/// characters or fewer and stop words are skipped. Equal counts keep the order
/// in which the words first appeared.
pub fn extract_key_topics(
    stations: &[StationRecord],
    sentiment: Sentiment,
    top_n: usize,
) -> Vec<TopicCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    let texts = stations
        .iter()
        .flat_map(analyzable_reviews)
        .filter(|review| Sentiment::from_rating(review.rating) == sentiment)
        .map(|review| normalize_text(&review.text));

    for text in texts {
        for word in text.split_whitespace() {
            if word.chars().count() <= MAX_IGNORED_WORD_CHARS || TOPIC_STOP_WORDS.contains(&word) {
                continue;
            }
            let count = counts.entry(word.to_string()).or_insert(0);
            if *count == 0 {
                order.push(word.to_string());
            }
            *count += 1;
        }
    }

    let mut topics: Vec<TopicCount> = order
        .into_iter()
        .map(|word| {
            let count = counts[&word];
            TopicCount { word, count }
        })
        .collect();
    topics.sort_by(|a, b| b.count.cmp(&a.count));
    topics.truncate(top_n);
    topics
}

/// Sentiment overview of a cleaned dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentReport {
    pub breakdown: SentimentBreakdown,
    /// Stations ranked best first
    pub stations: Vec<StationSentiment>,
    pub positive_topics: Vec<TopicCount>,
    pub negative_topics: Vec<TopicCount>,
}

/// Build the full sentiment report
pub fn build_sentiment_report(
    stations: &[StationRecord],
    min_reviews: usize,
    top_topics: usize,
) -> SentimentReport {
    SentimentReport {
        breakdown: sentiment_breakdown(stations),
        stations: analyze_by_station(stations, min_reviews),
        positive_topics: extract_key_topics(stations, Sentiment::Positive, top_topics),
        negative_topics: extract_key_topics(stations, Sentiment::Negative, top_topics),
    }
}

fn analyzable_reviews(station: &StationRecord) -> impl Iterator<Item = &ReviewRecord> {
    station.reviews.iter().filter(|review| is_analyzable(review))
}

// Lower-case and turn everything except letters, digits and `_` into spaces
fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}
