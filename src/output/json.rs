//! JSON export

use crate::output::traits::{OutputResult, RecordWriter};
use crate::product::Product;

/// Writes the store as a single compact JSON array of objects
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriter;

impl RecordWriter for JsonWriter {
    fn render(&self, products: &[Product]) -> OutputResult<String> {
        Ok(serde_json::to_string(products)?)
    }
}
