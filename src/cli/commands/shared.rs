//! Shared components for CLI commands
//!
//! Logging setup, layered configuration loading, the loading spinner, and small
//! formatting helpers used by more than one command.

use crate::app::models::StationDataset;
use crate::app::services::station_loader::StationLoader;
use crate::cli::args::CommonArgs;
use crate::config::{Config, LoggingConfig};
use crate::{Error, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn setup_logging(logging: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("station_reviews={}", logging.level)));

    let result = if logging.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialise logging: {e}")))?;

    debug!("Logging initialized at level: {}", logging.level);
    Ok(())
}

/// Load configuration using the layered approach (defaults -> file -> args)
pub fn load_configuration(args: &CommonArgs) -> Result<Config> {
    let mut config = Config::load(args.config_file.as_deref())?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;
    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &CommonArgs) {
    if let Some(source) = &args.source {
        config.loader.source = source.clone();
    }
    if let Some(timeout) = args.timeout {
        config.loader.timeout_secs = timeout;
    }
    if let Some(level) = args.get_log_level() {
        config.logging.level = level.to_string();
    }
    if args.quiet {
        config.logging.quiet = true;
    }
}

/// Configure logging and load the configuration for a command
pub fn prepare(args: &CommonArgs) -> Result<Config> {
    let config = load_configuration(args)?;
    setup_logging(&config.logging)?;
    info!("Using data source: {}", config.loader.source);
    Ok(config)
}

/// Create a spinner for the one-shot load
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Load and clean the dataset, showing a spinner when requested
pub async fn load_dataset(config: &Config, show_progress: bool) -> Result<StationDataset> {
    let loader = StationLoader::new(&config.loader)?;
    let spinner = show_progress.then(|| create_spinner("Loading station data..."));

    let result = loader.load().await;

    if let Some(pb) = spinner {
        match &result {
            Ok(dataset) => pb.finish_with_message(format!("Loaded {} stations", dataset.len())),
            Err(_) => pb.abandon_with_message("Failed to load station data"),
        }
    }

    result
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| Error::json("Failed to render JSON output", e))?;
    println!("{rendered}");
    Ok(())
}

/// Print a section heading
pub fn print_heading(title: &str) {
    println!("\n{}", title.bright_green().bold());
}

/// Print a `label: value` line
pub fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", label.bright_cyan(), value.to_string().bright_white());
}

/// Format an optional rating for display
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(rating) if rating > 0.0 => format!("{rating:.1}"),
        _ => "N/A".to_string(),
    }
}

/// Format a percentage with one decimal place
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::Args;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn common(args: &[&str]) -> CommonArgs {
        let args = Args::try_parse_from(args).unwrap();
        args.command.unwrap().common().clone()
    }

    #[test]
    fn test_apply_cli_overrides() {
        let args = common(&[
            "station-reviews",
            "summary",
            "--source",
            "local.json",
            "--timeout",
            "9",
            "-vv",
        ]);
        let mut config = Config::default();
        apply_cli_overrides(&mut config, &args);

        assert_eq!(config.loader.source, "local.json");
        assert_eq!(config.loader.timeout_secs, 9);
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.quiet);
    }

    #[test]
    fn test_overrides_leave_config_values_without_flags() {
        let args = common(&["station-reviews", "summary"]);
        let mut config = Config::default()
            .with_source("from-file.json")
            .with_log_level("info");
        apply_cli_overrides(&mut config, &args);

        assert_eq!(config.loader.source, "from-file.json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_configuration_layers_file_and_args() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"loader": {{"source": "file.json", "timeout_secs": 4}},
                "search": {{"default_limit": 2}}}}"#
        )
        .unwrap();
        let path = file.path().display().to_string();

        let args = common(&["station-reviews", "summary", "--config", &path, "--timeout", "8"]);
        let config = load_configuration(&args).unwrap();

        assert_eq!(config.loader.source, "file.json");
        assert_eq!(config.loader.timeout_secs, 8);
        assert_eq!(config.search.default_limit, 2);
    }

    #[test]
    fn test_load_configuration_rejects_zero_timeout() {
        let args = common(&["station-reviews", "summary", "--source", "x.json", "--timeout", "0"]);
        assert!(matches!(
            load_configuration(&args),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_rating(Some(4.26)), "4.3");
        assert_eq!(format_rating(Some(0.0)), "N/A");
        assert_eq!(format_rating(None), "N/A");
        assert_eq!(format_percent(66.666), "66.7%");
    }
}
