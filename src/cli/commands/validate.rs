//! Validate command implementation
//!
//! Reports what the cleaning pass removed: invalid records by reason and the
//! `place_id`s that occurred more than once.

use super::shared::{
    create_spinner, format_percent, prepare, print_field, print_heading, print_json,
};
use crate::Result;
use crate::app::services::station_cleaner::{CleaningStats, ValidationIssue, inspect_stations};
use crate::app::services::station_loader::StationLoader;
use crate::cli::args::{OutputFormat, ValidateArgs};
use colored::*;
use serde_json::json;
use tracing::info;

/// Maximum duplicate ids listed in human output
const MAX_DUPLICATES_SHOWN: usize = 10;

/// Validate command runner
///
/// The report is printed even when no station survives; the empty-dataset
/// error is returned afterwards so the exit code still reflects the failure.
pub async fn run_validate(args: ValidateArgs) -> Result<()> {
    let config = prepare(&args.common)?;
    let loader = StationLoader::new(&config.loader)?;

    let spinner = args
        .common
        .show_progress()
        .then(|| create_spinner("Fetching raw station data..."));
    let raw = loader.fetch_raw().await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let raw = raw?;

    info!("Validating {} raw records", raw.len());
    let result = inspect_stations(&raw)?;

    match args.common.output_format {
        OutputFormat::Json => print_json(&json!({ "cleaning": result.stats }))?,
        OutputFormat::Human => print_report(&result.stats),
    }

    if result.stations.is_empty() {
        return Err(result.stats.empty_dataset_error());
    }
    Ok(())
}

fn print_report(stats: &CleaningStats) {
    let duplicates = &stats.duplicate_ids;

    print_heading("Cleaning Report");
    print_field("Raw records:", stats.total_input);
    print_field(
        "Valid:",
        format!("{} ({})", stats.valid, format_percent(stats.validity_rate())),
    );
    print_field("Invalid:", stats.invalid);
    print_field("Duplicates removed:", stats.duplicates_removed);
    print_field(
        "Unique stations:",
        format!("{} ({})", stats.unique, format_percent(stats.uniqueness_rate())),
    );

    print_heading("Rejections");
    if stats.rejections.is_empty() {
        println!("  {}", "No invalid records".bright_green());
    }
    for issue in ValidationIssue::ALL {
        let count = stats.rejections_for(issue);
        if count > 0 {
            print_field(&format!("{}:", issue.description()), count);
        }
    }

    print_heading("Duplicate IDs");
    if duplicates.is_empty() {
        println!("  {}", "No duplicate place_ids".bright_green());
        return;
    }
    for duplicate in duplicates.iter().take(MAX_DUPLICATES_SHOWN) {
        println!(
            "  {} {}",
            duplicate.place_id.bright_white(),
            format!("x{}", duplicate.occurrences).bright_yellow()
        );
    }
    if duplicates.len() > MAX_DUPLICATES_SHOWN {
        println!(
            "  {}",
            format!("... {} more", duplicates.len() - MAX_DUPLICATES_SHOWN).dimmed()
        );
    }
}
