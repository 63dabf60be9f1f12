//! Workbook Scraper main entry point
//!
//! This is the command-line interface for the workbook scraper.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use workbook_scraper::config::{load_config, Config};
use workbook_scraper::crawler::run_scrape;
use workbook_scraper::output::{write_outputs, OutputFormat};

/// Number of exercises scraped in test mode
const TEST_MODE_EXERCISES: usize = 5;

/// Workbook Scraper: collects workbook answers into JSON, Markdown and text
///
/// Reads the workbook's landing page, visits every exercise in order with a
/// pause between requests, and writes the collected answers into the output
/// directory.
#[derive(Parser, Debug)]
#[command(name = "workbook-scraper")]
#[command(version = "1.0.0")]
#[command(about = "Collects workbook answers into JSON, Markdown and text", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Scrape only the first few exercises
    #[arg(long)]
    test_mode: bool,

    /// Show the resolved configuration without scraping
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config(path) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => Config::default(),
    };

    if cli.test_mode {
        config.scraper.max_exercises = Some(TEST_MODE_EXERCISES);
    }

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_scrape(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("workbook_scraper=info,warn"),
            1 => EnvFilter::new("workbook_scraper=debug,info"),
            2 => EnvFilter::new("workbook_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows what would be scraped and written
fn handle_dry_run(config: &Config) {
    println!("=== Workbook Scraper Dry Run ===\n");

    println!("Site:");
    println!("  Landing page: {}", config.book_url());

    println!("\nScraper:");
    println!("  Delay: {}s", config.scraper.delay_seconds);
    match config.scraper.max_exercises {
        Some(max) => println!("  Max exercises: {}", max),
        None => println!("  Max exercises: no limit"),
    }
    println!("  User agent: {}", config.scraper.user_agent);

    println!("\nOutput:");
    for format in OutputFormat::ALL {
        println!("  {:?}: {}", format, format.path(&config.output).display());
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main scrape operation
async fn handle_scrape(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let output = config.output.clone();

    let tree = match run_scrape(config).await {
        Ok(tree) => tree,
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            return Err(e.into());
        }
    };

    write_outputs(&tree, &output)?;

    tracing::info!(
        "All done! {} sections, {} exercises ({} failed) written to '{}'",
        tree.len(),
        tree.exercise_count(),
        tree.failed_count(),
        output.directory.display()
    );
    tracing::info!(
        "For Word, use the '{}' file for the cleanest format",
        output.text_file
    );

    Ok(())
}
