//! Export of the result store to disk
//!
//! `export` is the entry point used by the harvester. It never fails: every
//! problem is logged and reported through [`ExportOutcome`].

use crate::output::csv::CsvWriter;
use crate::output::json::JsonWriter;
use crate::output::traits::{ExportFormat, OutputError, OutputResult, RecordWriter};
use crate::product::Product;
use std::path::{Path, PathBuf};

/// What an export call did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// No format was requested; nothing was touched
    Skipped,

    /// The requested format is not supported; nothing was written
    InvalidFormat(String),

    /// The snapshot was written to `path`
    Written { path: PathBuf, records: usize },

    /// Creating the directory or writing the file failed
    Failed { message: String },
}

/// Exports a full snapshot of `products` in the requested format
///
/// * `None` or an empty selector - no-op
/// * `json` / `csv` (any case) - create `directory` if needed and overwrite
///   `product.json` / `product.csv` inside it
/// * anything else - log an invalid format error, no filesystem access
pub async fn export(products: &[Product], selector: Option<&str>, directory: &Path) -> ExportOutcome {
    let selector = match selector {
        Some(s) if !s.is_empty() => s,
        _ => return ExportOutcome::Skipped,
    };

    let format = match selector.parse::<ExportFormat>() {
        Ok(format) => format,
        Err(e) => {
            tracing::error!("{}", e);
            return ExportOutcome::InvalidFormat(selector.to_string());
        }
    };

    // A failed directory creation is reported on its own; the write below
    // reports whether the file could still be produced.
    if let Err(e) = ensure_directory(directory).await {
        tracing::error!("{}", e);
    }

    match write_export(products, format, directory).await {
        Ok(path) => {
            tracing::info!(
                "Data exported to {} ({} records)",
                format.file_name(),
                products.len()
            );
            ExportOutcome::Written {
                path,
                records: products.len(),
            }
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExportOutcome::Failed {
                message: e.to_string(),
            }
        }
    }
}

/// Creates `directory` and any missing parents
pub async fn ensure_directory(directory: &Path) -> OutputResult<()> {
    tokio::fs::create_dir_all(directory)
        .await
        .map_err(|source| OutputError::CreateDir {
            path: directory.to_path_buf(),
            source,
        })?;
    tracing::debug!("Directory {} found successfully", directory.display());
    Ok(())
}

/// Renders `products` and overwrites the format's file in `directory`
///
/// Returns the path written.
pub async fn write_export(
    products: &[Product],
    format: ExportFormat,
    directory: &Path,
) -> OutputResult<PathBuf> {
    let contents = match format {
        ExportFormat::Json => JsonWriter.render(products)?,
        ExportFormat::Csv => CsvWriter.render(products)?,
    };

    let path = directory.join(format.file_name());
    tokio::fs::write(&path, contents)
        .await
        .map_err(|source| OutputError::Write {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}
