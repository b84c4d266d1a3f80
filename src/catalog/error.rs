//! Catalog error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or querying the article and story catalogs.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read from disk.
    #[error("failed to read catalog file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file was read but is not valid JSON for the expected shape.
    #[error("failed to parse catalog file {path}: {source}")]
    FileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Catalog content violates an invariant (duplicate ids, bad seed data).
    #[error("catalog data is invalid: {reason}")]
    InvalidData { reason: String },
}
