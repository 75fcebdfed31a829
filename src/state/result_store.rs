use crate::product::Product;

/// Append-only collection of every product extracted during a run
///
/// Owned by the harvester for the lifetime of one run. Records keep the order
/// in which pages were visited and cards appeared on each page.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    products: Vec<Product>,
}

impl ResultStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the products of one page, in page order
    pub fn extend<I>(&mut self, products: I)
    where
        I: IntoIterator<Item = Product>,
    {
        self.products.extend(products);
    }

    /// Current snapshot of every record collected so far
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
