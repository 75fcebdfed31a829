//! Shop-Harvest: a paginated product listing scraper
//!
//! This crate discovers how many listing pages a shop exposes, visits every page
//! exactly once in random order, extracts product records from each page and
//! exports the accumulated records as JSON or CSV.

pub mod config;
pub mod crawler;
pub mod output;
pub mod product;
pub mod state;

use thiserror::Error;

/// Main error type for Shop-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("HTML parse error for {url}: {message}")]
    HtmlParse { url: String, message: String },

    #[error("No pagination indicators found at {url}")]
    NoPagination { url: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid CSS selector: {0}")]
    InvalidSelector(String),
}

// Re-export commonly used types
pub use config::Config;
pub use crawler::{HarvestSummary, Harvester};
pub use output::{export, ExportFormat, ExportOutcome};
pub use product::Product;
pub use state::ResultStore;
