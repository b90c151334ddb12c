//! Summary command implementation
//!
//! Prints the dashboard headline figures, the data-quality report and the
//! review sentiment overview.

use super::shared::{
    format_percent, format_rating, load_dataset, prepare, print_field, print_heading, print_json,
};
use crate::Result;
use crate::app::models::StationDataset;
use crate::app::services::statistics::{
    QualityLevel, QualityReport, Sentiment, SentimentReport, StationSentiment, TopicCount,
    build_quality_report, build_sentiment_report,
};
use crate::constants::RANKED_STATIONS_SHOWN;
use crate::cli::args::{OutputFormat, SummaryArgs};
use colored::*;
use serde_json::json;

/// Summary command runner
pub async fn run_summary(args: SummaryArgs) -> Result<()> {
    let config = prepare(&args.common)?;
    let dataset = load_dataset(&config, args.common.show_progress()).await?;
    let report = build_quality_report(dataset.stations());
    let sentiment = build_sentiment_report(dataset.stations(), args.min_reviews, args.topics);

    match args.common.output_format {
        OutputFormat::Json => print_json(&json!({
            "stats": dataset.stats(),
            "cleaning": dataset.cleaning_stats(),
            "quality": report,
            "assessment": report.assessment(),
            "sentiment": sentiment,
        })),
        OutputFormat::Human => {
            print_summary(&dataset, &report);
            print_sentiment(&sentiment, args.min_reviews);
            Ok(())
        }
    }
}

fn print_summary(dataset: &StationDataset, report: &QualityReport) {
    let stats = dataset.stats();

    print_heading("Station Summary");
    print_field("Stations:", stats.total_stations);
    print_field("Average rating:", format!("{:.2}", stats.average_rating));
    print_field("Top rating:", format_rating(stats.max_rating));
    print_field("Total reviews:", stats.total_reviews);
    print_field(
        "Stations with reviews:",
        format!(
            "{} ({})",
            stats.stations_with_reviews,
            format_percent(stats.review_coverage())
        ),
    );
    print_field("Most reviews on one station:", stats.max_review_count);
    print_field("Cleaning:", dataset.cleaning_stats().summary());

    print_heading("Rating Distribution");
    if report.rating_distribution.is_empty() {
        println!("  {}", "No rated stations".dimmed());
    }
    for (star, count) in &report.rating_distribution {
        print_field(&format!("{star} stars:"), count);
    }

    print_heading("Reviews per Station");
    for bucket in &report.review_count_distribution {
        print_field(&format!("{}:", bucket.label), bucket.count);
    }

    print_heading("Business Status");
    for (status, count) in &report.business_status_counts {
        print_field(&format!("{status}:"), count);
    }

    print_heading("Review Languages");
    if report.language_counts.is_empty() {
        println!("  {}", "No reviews".dimmed());
    }
    for (language, count) in &report.language_counts {
        print_field(&format!("{language}:"), count);
    }

    print_heading("Completeness");
    print_field("With rating:", report.stations_with_rating);
    print_field("With phone:", report.stations_with_phone);
    print_field("With website:", report.stations_with_website);

    let assessment = report.assessment();
    print_heading("Quality Assessment");
    println!(
        "  {} {:.1}% ({})",
        "Review coverage:".bright_cyan(),
        assessment.review_coverage * 100.0,
        level_label(assessment.review_coverage_level)
    );
    println!(
        "  {} {:.1} ({})",
        "Reviews per station:".bright_cyan(),
        assessment.reviews_per_station,
        level_label(assessment.reviews_per_station_level)
    );
    println!(
        "  {} {:.1}% ({})",
        "Operational rate:".bright_cyan(),
        assessment.operational_rate * 100.0,
        level_label(assessment.operational_rate_level)
    );
    println!(
        "  {} {}",
        "Overall:".bright_cyan(),
        level_label(assessment.overall()).bold()
    );
}

fn print_sentiment(report: &SentimentReport, min_reviews: usize) {
    let breakdown = &report.breakdown;

    print_heading("Review Sentiment (by rating)");
    if breakdown.total() == 0 {
        println!("  {}", "No reviews with text".dimmed());
        return;
    }
    print_field("Reviews with text:", breakdown.total());
    for sentiment in [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative] {
        println!(
            "  {} {}",
            format!("{}:", capitalize(sentiment.as_str())).bright_cyan(),
            sentiment_label(sentiment, &format_percent(breakdown.ratio(sentiment) * 100.0))
        );
    }

    let ranked = &report.stations;
    print_heading(&format!("Best Stations (min {min_reviews} reviews)"));
    if ranked.is_empty() {
        println!("  {}", "No station has enough reviews".dimmed());
    } else {
        for station in ranked.iter().take(RANKED_STATIONS_SHOWN) {
            print_ranked(station);
        }

        // Bottom of the ranking, worst last, without repeating the best ones
        let bottom_start = ranked
            .len()
            .saturating_sub(RANKED_STATIONS_SHOWN)
            .max(RANKED_STATIONS_SHOWN);
        if bottom_start < ranked.len() {
            print_heading("Stations Needing Attention");
            for station in &ranked[bottom_start..] {
                print_ranked(station);
            }
        }
    }

    print_topics("Positive Topics", &report.positive_topics);
    print_topics("Negative Topics", &report.negative_topics);
}

fn print_ranked(station: &StationSentiment) {
    let score = format!("{:+}", station.sentiment_score);
    let score = match station.sentiment_score {
        s if s > 0 => score.bright_green(),
        s if s < 0 => score.bright_red(),
        _ => score.bright_yellow(),
    };
    println!(
        "  {} {} {}",
        score,
        station.name.bright_white(),
        format!(
            "({} reviews, avg {:.2}, {} positive, {} negative)",
            station.total_reviews,
            station.average_rating,
            format_percent(station.positive_ratio * 100.0),
            format_percent(station.negative_ratio * 100.0)
        )
        .dimmed()
    );
}

fn print_topics(title: &str, topics: &[TopicCount]) {
    print_heading(title);
    if topics.is_empty() {
        println!("  {}", "None".dimmed());
        return;
    }
    let line = topics
        .iter()
        .map(|topic| format!("{} ({})", topic.word, topic.count))
        .collect::<Vec<_>>()
        .join(", ");
    println!("  {line}");
}

fn sentiment_label(sentiment: Sentiment, text: &str) -> ColoredString {
    match sentiment {
        Sentiment::Positive => text.bright_green(),
        Sentiment::Neutral => text.bright_yellow(),
        Sentiment::Negative => text.bright_red(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn level_label(level: QualityLevel) -> ColoredString {
    match level {
        QualityLevel::Good => level.as_str().bright_green(),
        QualityLevel::Moderate => level.as_str().bright_yellow(),
        QualityLevel::Low => level.as_str().bright_red(),
    }
}
