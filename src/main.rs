use clap::Parser;
use station_reviews::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            Ok(()) = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, stopping...");
                Err(station_reviews::Error::processing_interrupted(
                    "Loading interrupted by user",
                ))
            }
        }
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {}", error);
            if error.is_retryable() {
                eprintln!("The data could not be loaded. Run the command again to retry.");
            }
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Station Reviews - Gas Station Review Dataset Tool");
    println!("=================================================");
    println!();
    println!("Load a JSON dataset of gas stations with embedded customer reviews,");
    println!("drop malformed and duplicate stations, and explore the result.");
    println!();
    println!("USAGE:");
    println!("    station-reviews <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    summary     Print dashboard statistics and a data-quality report");
    println!("    search      Search stations by name or address");
    println!("    show        Show one station and its reviews");
    println!("    validate    Report what cleaning removed and why");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Summarise the default dataset:");
    println!("    station-reviews summary");
    println!();
    println!("    # Search a remote dataset:");
    println!("    station-reviews search shell --source https://example.com/stations.json");
    println!();
    println!("    # Show a station with its first ten reviews as JSON:");
    println!("    station-reviews show ChIJ... --reviews 10 --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    station-reviews <COMMAND> --help");
}
