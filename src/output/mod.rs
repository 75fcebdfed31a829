//! Output module for exporting harvested products
//!
//! This module handles:
//! - Parsing the requested export format
//! - Rendering the result store as JSON or CSV
//! - Writing the export file, creating its directory on demand

mod csv;
mod exporter;
mod json;
mod traits;

pub use csv::{CsvWriter, CSV_HEADER, LINE_ENDING};
pub use exporter::{ensure_directory, export, write_export, ExportOutcome};
pub use json::JsonWriter;
pub use traits::{ExportFormat, OutputError, OutputResult, RecordWriter};
