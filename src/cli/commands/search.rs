//! Search command implementation

use super::shared::{format_rating, load_dataset, prepare, print_heading, print_json};
use crate::Result;
use crate::app::models::StationRecord;
use crate::cli::args::{OutputFormat, SearchArgs};
use colored::*;
use tracing::debug;

/// Search command runner
///
/// Results keep dataset order and are cut to the requested limit.
pub async fn run_search(args: SearchArgs) -> Result<()> {
    let config = prepare(&args.common)?;
    let dataset = load_dataset(&config, args.common.show_progress()).await?;

    let matches = dataset.search(&args.term);
    let limit = args.limit.unwrap_or(config.search.default_limit);
    debug!(
        "Search '{}' matched {} stations, showing up to {}",
        args.term,
        matches.len(),
        limit
    );

    let shown: Vec<&StationRecord> = matches.iter().take(limit).copied().collect();

    match args.common.output_format {
        OutputFormat::Json => print_json(&shown),
        OutputFormat::Human => {
            print_results(&args.term, &shown, matches.len());
            Ok(())
        }
    }
}

fn print_results(term: &str, shown: &[&StationRecord], total_matches: usize) {
    let title = if term.is_empty() {
        format!("All stations ({total_matches})")
    } else {
        format!("Stations matching '{term}' ({total_matches})")
    };
    print_heading(&title);

    if shown.is_empty() {
        println!("  {}", "No stations found".dimmed());
        return;
    }

    for station in shown {
        println!(
            "  {} {} {}",
            format_rating(station.rating).bright_yellow(),
            station.name.bright_white().bold(),
            format!("[{}]", station.place_id).dimmed()
        );
        if !station.address.is_empty() {
            println!("      {}", station.address);
        }
        println!(
            "      {} reviews",
            station.review_count().to_string().bright_cyan()
        );
    }

    if shown.len() < total_matches {
        println!(
            "\n  {}",
            format!("... {} more (use --limit to show more)", total_matches - shown.len()).dimmed()
        );
    }
}
