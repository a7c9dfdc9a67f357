//! Typed errors for pricing file operations

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while parsing percentage expressions and processing
/// pricing files.
///
/// Only `InvalidPercentage` aborts a run; the file-level variants are
/// caught per file so the rest of the batch keeps going.
#[derive(Debug, Error)]
pub enum PricingError {
    #[error("Invalid percentage format: '{0}'. Use formats like '6%', '-1.5%', '6', or '-1.5'")]
    InvalidPercentage(String),

    #[error("{} not found or doesn't exist", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to parse pricing file '{}': {source}", .path.display())]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
