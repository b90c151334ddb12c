//! Command implementations for the station reviews CLI
//!
//! Each subcommand lives in its own module; [`shared`] holds logging, config
//! and output helpers used by all of them.

pub mod search;
pub mod shared;
pub mod show;
pub mod summary;
pub mod validate;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Dispatches to the subcommand handler. Returns `Ok(())` without doing anything
/// when no subcommand was given; the binary prints help in that case.
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Summary(summary_args)) => summary::run_summary(summary_args).await,
        Some(Commands::Search(search_args)) => search::run_search(search_args).await,
        Some(Commands::Show(show_args)) => show::run_show(show_args).await,
        Some(Commands::Validate(validate_args)) => validate::run_validate(validate_args).await,
        None => Ok(()),
    }
}
