//! Product record extracted from a listing page

use serde::Serialize;

/// One product card's worth of data
///
/// Fields are taken as found in the markup. Nothing is trimmed, validated or
/// normalized, and the same product may appear more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Text content of the title element (empty when missing)
    pub name: String,

    /// `src` of the first image in the card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// `href` of the product link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Text content of the price element, currency symbol included
    pub price: String,
}

impl Product {
    /// Builds a product from its four fields
    pub fn new(
        name: impl Into<String>,
        image: Option<String>,
        url: Option<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            image,
            url,
            price: price.into(),
        }
    }
}
