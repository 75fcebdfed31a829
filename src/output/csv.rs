//! CSV export
//!
//! Fields are joined with bare commas and are not quoted or escaped, so a value
//! containing a comma shifts the columns of its row. Consumers rely on this
//! exact layout.

use crate::output::traits::{OutputResult, RecordWriter};
use crate::product::Product;

/// Header row of every CSV export
pub const CSV_HEADER: &str = "name,image,url,price";

/// Host platform line terminator
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Writes the store as a header line followed by one line per record
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvWriter;

impl RecordWriter for CsvWriter {
    fn render(&self, products: &[Product]) -> OutputResult<String> {
        let rows = products
            .iter()
            .map(format_row)
            .collect::<Vec<_>>()
            .join(LINE_ENDING);

        Ok(format!("{CSV_HEADER}{LINE_ENDING}{rows}"))
    }
}

fn format_row(product: &Product) -> String {
    format!(
        "{},{},{},{}",
        product.name,
        product.image.as_deref().unwrap_or_default(),
        product.url.as_deref().unwrap_or_default(),
        product.price
    )
}
