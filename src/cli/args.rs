//! Command-line argument definitions for the station reviews tool
//!
//! This module defines the CLI interface using the clap derive API. Every
//! subcommand shares the same source, config and logging flags through
//! [`CommonArgs`].

use crate::constants::{DEFAULT_MIN_STATION_REVIEWS, DEFAULT_REVIEWS_SHOWN, DEFAULT_TOPIC_COUNT};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the station reviews tool
///
/// Loads a gas-station dataset with embedded customer reviews, cleans it, and
/// reports statistics, search results or individual stations.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "station-reviews",
    version,
    about = "Clean, summarise and search gas-station review datasets",
    long_about = "Loads a JSON array of gas stations with embedded customer reviews from an \
                  HTTP endpoint or a local file, drops malformed and duplicate stations, and \
                  prints dashboard statistics, data-quality reports, search results and \
                  station details."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print dashboard statistics and a data-quality report
    Summary(SummaryArgs),
    /// Search stations by name or address
    Search(SearchArgs),
    /// Show one station and its reviews
    Show(ShowArgs),
    /// Report what cleaning removed and why
    Validate(ValidateArgs),
}

/// Flags shared by every subcommand
#[derive(Debug, Clone, clap::Args)]
pub struct CommonArgs {
    /// Dataset location
    ///
    /// An http(s) URL or a path to a local JSON file (optionally prefixed with file://).
    /// Overrides the source from the config file.
    #[arg(
        short = 's',
        long = "source",
        value_name = "URL|PATH",
        help = "Dataset URL or local JSON file"
    )]
    pub source: Option<String>,

    /// Configuration file path
    ///
    /// If not specified, uses ~/.config/station-reviews/config.json when it exists
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config_file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(
        long = "timeout",
        value_name = "SECS",
        help = "Request timeout in seconds"
    )]
    pub timeout: Option<u64>,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress progress output and most logging
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress progress output and most logging"
    )]
    pub quiet: bool,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the summary command
#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    /// Minimum reviews with text for a station to appear in the sentiment ranking
    #[arg(
        long = "min-reviews",
        value_name = "N",
        default_value_t = DEFAULT_MIN_STATION_REVIEWS,
        help = "Minimum reviews with text for a station to be ranked"
    )]
    pub min_reviews: usize,

    /// Number of key topics listed per sentiment
    #[arg(
        long = "topics",
        value_name = "N",
        default_value_t = DEFAULT_TOPIC_COUNT,
        help = "Number of key topics per sentiment"
    )]
    pub topics: usize,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the search command
#[derive(Debug, Clone, Parser)]
pub struct SearchArgs {
    /// Text matched against station names and addresses (case-insensitive)
    ///
    /// An empty term lists every station.
    #[arg(value_name = "TERM", default_value = "")]
    pub term: String,

    /// Maximum number of stations to print
    #[arg(
        short = 'l',
        long = "limit",
        value_name = "N",
        help = "Maximum number of results (default from config)"
    )]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the show command
#[derive(Debug, Clone, Parser)]
pub struct ShowArgs {
    /// Station identifier
    #[arg(value_name = "PLACE_ID")]
    pub place_id: String,

    /// Number of reviews to print
    #[arg(
        short = 'r',
        long = "reviews",
        value_name = "N",
        default_value_t = DEFAULT_REVIEWS_SHOWN,
        help = "Number of reviews to print"
    )]
    pub reviews: usize,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Commands {
    /// Shared flags of whichever subcommand was chosen
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Summary(args) => &args.common,
            Commands::Search(args) => &args.common,
            Commands::Show(args) => &args.common,
            Commands::Validate(args) => &args.common,
        }
    }
}

impl CommonArgs {
    /// Determine the log level from verbosity flags, if any were given
    pub fn get_log_level(&self) -> Option<&'static str> {
        if self.quiet {
            Some("error")
        } else {
            match self.verbose {
                0 => None,
                1 => Some("info"),
                2 => Some("debug"),
                _ => Some("trace"),
            }
        }
    }

    /// Check if we should show the loading spinner
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_no_subcommand() {
        let args = parse(&["station-reviews"]);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_search_args() {
        let args = parse(&[
            "station-reviews",
            "search",
            "shell",
            "--limit",
            "5",
            "--source",
            "https://example.com/stations.json",
        ]);

        match args.command {
            Some(Commands::Search(search)) => {
                assert_eq!(search.term, "shell");
                assert_eq!(search.limit, Some(5));
                assert_eq!(
                    search.common.source.as_deref(),
                    Some("https://example.com/stations.json")
                );
                assert_eq!(search.common.output_format, OutputFormat::Human);
            }
            other => panic!("expected search command, got {other:?}"),
        }
    }

    #[test]
    fn test_search_term_defaults_to_empty() {
        let args = parse(&["station-reviews", "search"]);
        match args.command {
            Some(Commands::Search(search)) => assert_eq!(search.term, ""),
            other => panic!("expected search command, got {other:?}"),
        }
    }

    #[test]
    fn test_show_args() {
        let args = parse(&[
            "station-reviews",
            "show",
            "ChIJ123",
            "--reviews",
            "2",
            "--format",
            "json",
        ]);

        match args.command {
            Some(Commands::Show(show)) => {
                assert_eq!(show.place_id, "ChIJ123");
                assert_eq!(show.reviews, 2);
                assert_eq!(show.common.output_format, OutputFormat::Json);
                assert!(!show.common.show_progress());
            }
            other => panic!("expected show command, got {other:?}"),
        }
    }

    #[test]
    fn test_show_requires_place_id() {
        assert!(Args::try_parse_from(["station-reviews", "show"]).is_err());
    }

    #[test]
    fn test_summary_sentiment_options() {
        match parse(&["station-reviews", "summary"]).command {
            Some(Commands::Summary(summary)) => {
                assert_eq!(summary.min_reviews, DEFAULT_MIN_STATION_REVIEWS);
                assert_eq!(summary.topics, DEFAULT_TOPIC_COUNT);
            }
            other => panic!("expected summary, got {other:?}"),
        }

        let args = parse(&["station-reviews", "summary", "--min-reviews", "1", "--topics", "4"]);
        match args.command {
            Some(Commands::Summary(summary)) => {
                assert_eq!(summary.min_reviews, 1);
                assert_eq!(summary.topics, 4);
            }
            other => panic!("expected summary, got {other:?}"),
        }
    }

    #[test]
    fn test_log_level() {
        let args = parse(&["station-reviews", "summary"]);
        let mut common = args.command.unwrap().common().clone();

        assert_eq!(common.get_log_level(), None);

        common.verbose = 1;
        assert_eq!(common.get_log_level(), Some("info"));

        common.verbose = 2;
        assert_eq!(common.get_log_level(), Some("debug"));

        common.verbose = 3;
        assert_eq!(common.get_log_level(), Some("trace"));

        common.quiet = true;
        assert_eq!(common.get_log_level(), Some("error"));
        assert!(!common.show_progress());
    }

    #[test]
    fn test_verbose_count_and_timeout() {
        let args = parse(&["station-reviews", "validate", "-vv", "--timeout", "3"]);
        let common = args.command.unwrap().common().clone();

        assert_eq!(common.verbose, 2);
        assert_eq!(common.timeout, Some(3));
        assert!(common.show_progress());
    }
}
