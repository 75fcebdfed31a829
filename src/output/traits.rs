//! Export format traits and types
//!
//! This module defines the trait interface for record writers and the error
//! type shared by every export path.

use crate::product::Product;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Invalid export format '{0}'. Only CSV and JSON are supported.")]
    InvalidFormat(String),

    #[error("Error creating directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error exporting data to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// Name of the file this format is written to
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Json => "product.json",
            Self::Csv => "product.csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = OutputError;

    /// Case-insensitive: `json`, `JSON` and `Json` are all accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "JSON" => Ok(Self::Json),
            "CSV" => Ok(Self::Csv),
            _ => Err(OutputError::InvalidFormat(s.to_string())),
        }
    }
}

/// Renders a full snapshot of the result store into file contents
pub trait RecordWriter {
    /// Serializes every record, in order
    fn render(&self, products: &[Product]) -> OutputResult<String>;
}
