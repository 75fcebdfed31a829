//! Crawler module for listing page fetching and processing
//!
//! This module contains the core harvesting logic, including:
//! - HTTP fetching
//! - Page count discovery and product extraction
//! - Random page coverage
//! - Overall run coordination

mod coordinator;
mod fetcher;
mod parser;
mod sampler;

pub use coordinator::{HarvestSummary, Harvester};
pub use fetcher::{build_http_client, fetch_page};
pub use parser::{extract_products, parse_page_count, PageSelectors};
pub use sampler::CoverageSampler;

use crate::config::Config;
use crate::HarvestError;

/// Runs a complete harvest
///
/// This is the main entry point for a run. It will:
/// 1. Build the HTTP client and compile selectors
/// 2. Discover the total page count
/// 3. Visit every page once, in random order
/// 4. Export the collected products
///
/// # Arguments
///
/// * `config` - The harvester configuration
/// * `export_format` - Requested export format, if any
///
/// # Returns
///
/// * `Ok(HarvestSummary)` - Every page was visited
/// * `Err(HarvestError)` - Page count discovery failed
pub async fn harvest(
    config: Config,
    export_format: Option<String>,
) -> Result<HarvestSummary, HarvestError> {
    Harvester::new(config, export_format)?.run().await
}
