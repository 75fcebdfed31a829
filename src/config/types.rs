use serde::Deserialize;

/// Main configuration structure for Shop-Harvest
///
/// Every section is optional; a missing section or key falls back to the
/// defaults for the scrapeme.live WooCommerce demo shop.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub selectors: SelectorConfig,
    pub output: OutputConfig,
}

/// Where the paginated listing lives
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scheme and host of the shop, without a trailing slash
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path prefix that the page number is appended to
    #[serde(rename = "listing-path")]
    pub listing_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://scrapeme.live".to_string(),
            listing_path: "/shop/page/".to_string(),
        }
    }
}

impl SiteConfig {
    /// Address used for page-count discovery
    pub fn first_page_url(&self) -> String {
        format!("{}{}1/", self.base_url, self.listing_path)
    }

    /// Address of listing page `page`
    pub fn page_url(&self, page: u32) -> String {
        format!("{}{}{}", self.base_url, self.listing_path, page)
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "shop-harvest".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// CSS selectors used to read listing markup
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Repeating product card container
    pub product: String,

    /// Title element inside a card
    pub title: String,

    /// Image element inside a card, read for `src`
    pub image: String,

    /// Link element inside a card, read for `href`
    pub link: String,

    /// Price element inside a card
    pub price: String,

    /// Numeric pagination indicators, excluding previous/next controls
    pub pagination: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            product: ".product".to_string(),
            title: ".woocommerce-loop-product__title".to_string(),
            image: "img".to_string(),
            link: "a.woocommerce-LoopProduct-link.woocommerce-loop-product__link".to_string(),
            price: "span.price".to_string(),
            pagination: ".page-numbers:not(.prev):not(.next)".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory export files are written to, created on demand
    pub directory: String,

    /// When exports happen during a run
    #[serde(rename = "export-policy")]
    pub export_policy: ExportPolicy,

    /// How page numbers are drawn
    pub sampling: SamplingStrategy,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "export-data".to_string(),
            export_policy: ExportPolicy::default(),
            sampling: SamplingStrategy::default(),
        }
    }
}

/// When the result store is written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportPolicy {
    /// Rewrite the export file after every visited page
    #[default]
    EveryPage,

    /// Write the export file once, after every page has been visited
    RunEnd,
}

/// Page number draw strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SamplingStrategy {
    /// Draw uniformly from the full range and redraw on already visited pages
    #[default]
    Rejection,

    /// Walk a shuffled permutation of the page range
    Shuffled,
}
