//! Show command implementation
//!
//! Prints one station's details and its first reviews.

use super::shared::{format_rating, load_dataset, prepare, print_field, print_heading, print_json};
use crate::Result;
use crate::app::models::{ReviewRecord, StationRecord};
use crate::cli::args::{OutputFormat, ShowArgs};
use crate::constants::MAX_RATING;
use colored::*;

/// Show command runner
///
/// # Errors
/// Returns `Error::StationNotFound` if no station has the given `place_id`
pub async fn run_show(args: ShowArgs) -> Result<()> {
    let config = prepare(&args.common)?;
    let dataset = load_dataset(&config, args.common.show_progress()).await?;
    let station = dataset.get_station(&args.place_id)?;

    match args.common.output_format {
        OutputFormat::Json => print_json(station),
        OutputFormat::Human => {
            print_station(station, args.reviews);
            Ok(())
        }
    }
}

fn print_station(station: &StationRecord, max_reviews: usize) {
    print_heading(&station.name);
    print_field("Place ID:", &station.place_id);
    if !station.address.is_empty() {
        print_field("Address:", &station.address);
    }
    print_field(
        "Location:",
        format!("{:.5}, {:.5}", station.latitude, station.longitude),
    );
    print_field(
        "Rating:",
        format!("{} / {MAX_RATING:.0}", format_rating(station.rating)),
    );
    if let Some(total) = station.user_ratings_total {
        print_field("Total ratings:", total);
    }
    if let Some(status) = &station.business_status {
        print_field("Status:", status);
    }
    if let Some(phone) = &station.phone_number {
        print_field("Phone:", phone);
    }
    if let Some(website) = &station.website {
        print_field("Website:", website);
    }

    print_heading(&format!("Reviews ({})", station.review_count()));
    if !station.has_reviews() {
        println!("  {}", "No reviews".dimmed());
        return;
    }

    for review in station.reviews.iter().take(max_reviews) {
        print_review(review);
    }

    let hidden = station.review_count().saturating_sub(max_reviews);
    if hidden > 0 {
        println!(
            "  {}",
            format!("... {hidden} more (use --reviews to show more)").dimmed()
        );
    }
}

fn print_review(review: &ReviewRecord) {
    let author = if review.author_name.is_empty() {
        "Anonymous"
    } else {
        review.author_name.as_str()
    };
    let when = review
        .formatted_date()
        .unwrap_or_else(|| review.relative_time_description.clone());

    println!(
        "  {} {} {}",
        format!("{:.0}/{MAX_RATING:.0}", review.rating).bright_yellow(),
        author.bright_white().bold(),
        when.dimmed()
    );
    if review.has_text() {
        println!("      {}", review.text.trim());
    }
    println!();
}
