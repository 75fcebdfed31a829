//! Harvest coordinator - main pipeline orchestration logic
//!
//! This module contains the run loop that ties the pipeline together:
//! - Discovering the total page count
//! - Drawing pages through the coverage sampler
//! - Fetching and extracting each page into the result store
//! - Triggering exports according to the export policy

use crate::config::{validate, Config, ExportPolicy};
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::parser::{extract_products, parse_page_count, PageSelectors};
use crate::crawler::sampler::CoverageSampler;
use crate::output::{export, ExportOutcome};
use crate::state::ResultStore;
use crate::HarvestError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reqwest::Client;
use std::path::Path;
use std::time::{Duration, Instant};

/// Totals reported at the end of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestSummary {
    /// Page count discovered on the first page
    pub total_pages: u32,
    /// Distinct pages drawn, failed ones included
    pub pages_visited: u32,
    /// Pages whose fetch failed
    pub pages_failed: u32,
    /// Records in the result store
    pub products: usize,
    /// Random draws made by the sampler, rejected ones included
    pub draws: u64,
    pub elapsed: Duration,
}

/// Owns all state of one harvest run
pub struct Harvester<R = StdRng> {
    config: Config,
    client: Client,
    selectors: PageSelectors,
    store: ResultStore,
    export_format: Option<String>,
    rng: R,
}

impl Harvester<StdRng> {
    /// Creates a harvester seeded from the operating system's RNG
    ///
    /// # Arguments
    ///
    /// * `config` - The harvester configuration
    /// * `export_format` - Requested export format as given on the command line
    pub fn new(config: Config, export_format: Option<String>) -> Result<Self, HarvestError> {
        Self::with_rng(config, export_format, StdRng::from_os_rng())
    }
}

impl<R: Rng> Harvester<R> {
    /// Creates a harvester drawing pages from `rng`
    pub fn with_rng(
        config: Config,
        export_format: Option<String>,
        rng: R,
    ) -> Result<Self, HarvestError> {
        validate(&config)?;
        let selectors = PageSelectors::new(&config.selectors)?;
        let client = build_http_client(&config.user_agent)?;

        Ok(Self {
            config,
            client,
            selectors,
            store: ResultStore::new(),
            export_format,
            rng,
        })
    }

    /// Runs page-count discovery followed by full page coverage
    ///
    /// Only a failed page-count discovery is returned as an error. Failures on
    /// individual pages and during export are logged and the run continues.
    pub async fn run(&mut self) -> Result<HarvestSummary, HarvestError> {
        let start_time = Instant::now();

        let total_pages = self.count_pages().await?;
        tracing::info!("Found {} pages", total_pages);

        let mut sampler =
            CoverageSampler::new(total_pages, self.config.output.sampling, &mut self.rng);
        let mut pages_failed = 0;

        while let Some(page) = sampler.next_page(&mut self.rng) {
            if !self.process_page(page).await {
                pages_failed += 1;
            }
        }

        if self.config.output.export_policy == ExportPolicy::RunEnd {
            self.export().await;
        }

        let summary = HarvestSummary {
            total_pages,
            pages_visited: sampler.visited_count() as u32,
            pages_failed,
            products: self.store.len(),
            draws: sampler.draws(),
            elapsed: start_time.elapsed(),
        };

        tracing::info!("Scraping done for {} pages!", summary.pages_visited);
        tracing::info!(
            "Harvest completed: {} products, {} failed pages, {} draws in {:?}",
            summary.products,
            summary.pages_failed,
            summary.draws,
            summary.elapsed
        );

        Ok(summary)
    }

    /// Fetches the first listing page and reads the total page count
    pub async fn count_pages(&self) -> Result<u32, HarvestError> {
        let url = self.config.site.first_page_url();
        let body = fetch_page(&self.client, &url).await?;
        parse_page_count(&body, &self.selectors, &url)
    }

    /// Fetches one page and appends its products to the store
    ///
    /// Returns `false` when the page could not be fetched. The failure is
    /// logged and the store is left unchanged.
    pub async fn process_page(&mut self, page: u32) -> bool {
        let url = self.config.site.page_url(page);

        let body = match fetch_page(&self.client, &url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Failed to harvest page {}: {}", page, e);
                return false;
            }
        };

        let products = extract_products(&body, &self.selectors);
        tracing::debug!("Page {} yielded {} products", page, products.len());
        self.store.extend(products);

        tracing::info!("Page {} done!", page);

        if self.config.output.export_policy == ExportPolicy::EveryPage {
            self.export().await;
        }

        true
    }

    /// Exports the current store snapshot in the requested format
    pub async fn export(&self) -> ExportOutcome {
        export(
            self.store.products(),
            self.export_format.as_deref(),
            Path::new(&self.config.output.directory),
        )
        .await
    }

    /// Records collected so far
    pub fn store(&self) -> &ResultStore {
        &self.store
    }
}
