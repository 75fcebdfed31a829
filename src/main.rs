//! Shop-Harvest main entry point
//!
//! This is the command-line interface for the Shop-Harvest product scraper.

use clap::Parser;
use shop_harvest::config::load_optional_config;
use shop_harvest::crawler::harvest;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Shop-Harvest: a paginated product listing scraper
///
/// Visits every page of a shop listing in random order, extracts product
/// name, image, link and price, and exports them as JSON or CSV.
#[derive(Parser, Debug)]
#[command(name = "shop-harvest")]
#[command(version)]
#[command(about = "A paginated product listing scraper", long_about = None)]
struct Cli {
    /// Export format: json or csv (case-insensitive). Nothing is exported when omitted
    #[arg(short = 'e', long = "export_format", value_name = "FORMAT")]
    export_format: Option<String>,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match load_optional_config(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    tracing::info!(
        "Harvesting {} (export format: {})",
        config.site.base_url,
        cli.export_format.as_deref().unwrap_or("none")
    );

    match harvest(config, cli.export_format).await {
        Ok(summary) => {
            tracing::debug!("{:?}", summary);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("shop_harvest=info,warn"),
            1 => EnvFilter::new("shop_harvest=debug,info"),
            2 => EnvFilter::new("shop_harvest=trace,debug"),
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
