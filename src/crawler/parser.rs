//! HTML parser for listing pages
//!
//! This module reads two things out of listing markup:
//! - The total page count, from the pagination control
//! - Product records, one per product card

use crate::config::SelectorConfig;
use crate::product::Product;
use crate::{ConfigError, HarvestError};
use scraper::{ElementRef, Html, Selector};

/// Compiled form of [`SelectorConfig`]
#[derive(Debug, Clone)]
pub struct PageSelectors {
    product: Selector,
    title: Selector,
    image: Selector,
    link: Selector,
    price: Selector,
    pagination: Selector,
}

impl PageSelectors {
    /// Compiles every configured selector
    pub fn new(config: &SelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            product: compile("product", &config.product)?,
            title: compile("title", &config.title)?,
            image: compile("image", &config.image)?,
            link: compile("link", &config.link)?,
            price: compile("price", &config.price)?,
            pagination: compile("pagination", &config.pagination)?,
        })
    }
}

fn compile(name: &str, selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|e| {
        ConfigError::InvalidSelector(format!("{} selector '{}': {:?}", name, selector, e))
    })
}

/// Reads the total page count from a listing page
///
/// The pagination selector is expected to exclude previous/next controls; the
/// text of the last remaining indicator is the page count.
///
/// # Errors
///
/// * `NoPagination` - No indicator matched
/// * `HtmlParse` - The last indicator's text does not start with a number
///
/// A zero or negative count is returned as `0`.
pub fn parse_page_count(
    html: &str,
    selectors: &PageSelectors,
    url: &str,
) -> Result<u32, HarvestError> {
    let document = Html::parse_document(html);

    let last = document
        .select(&selectors.pagination)
        .last()
        .ok_or_else(|| HarvestError::NoPagination {
            url: url.to_string(),
        })?;

    let text = last.text().collect::<String>();
    leading_integer(&text).ok_or_else(|| HarvestError::HtmlParse {
        url: url.to_string(),
        message: format!("pagination indicator '{}' is not a number", text.trim()),
    })
}

/// Parses an optionally signed leading integer after whitespace
///
/// Zero and negative counts leave nothing to visit and map to `0`. Counts
/// above `u32::MAX` saturate.
fn leading_integer(text: &str) -> Option<u32> {
    let text = text.trim_start();
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    if negative {
        return Some(0);
    }

    // Only an overflow can fail here
    Some(rest[..digits].parse().unwrap_or(u32::MAX))
}

/// Extracts every product card on a page
///
/// A card missing a sub-element still yields a record: text fields become empty
/// and attribute fields become `None`.
///
/// # Example
///
/// ```
/// use shop_harvest::config::SelectorConfig;
/// use shop_harvest::crawler::{extract_products, PageSelectors};
///
/// let selectors = PageSelectors::new(&SelectorConfig::default()).unwrap();
/// let html = r#"<ul><li class="product"><h2 class="woocommerce-loop-product__title">Pikachu</h2></li></ul>"#;
/// let products = extract_products(html, &selectors);
/// assert_eq!(products[0].name, "Pikachu");
/// assert_eq!(products[0].image, None);
/// ```
pub fn extract_products(html: &str, selectors: &PageSelectors) -> Vec<Product> {
    let document = Html::parse_document(html);

    document
        .select(&selectors.product)
        .map(|card| Product {
            name: select_text(card, &selectors.title),
            image: select_attr(card, &selectors.image, "src"),
            url: select_attr(card, &selectors.link, "href"),
            price: select_text(card, &selectors.price),
        })
        .collect()
}

/// Concatenated text of every match inside `card`
fn select_text(card: ElementRef<'_>, selector: &Selector) -> String {
    card.select(selector)
        .flat_map(|element| element.text())
        .collect()
}

/// Attribute of the first match inside `card`
fn select_attr(card: ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    card.select(selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(str::to_string)
}
