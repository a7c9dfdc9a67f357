//! Pricing document model and on-disk JSON persistence

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::PricingError;

/// One pricing record: a flat field-name to value mapping.
pub type PriceRow = Map<String, Value>;

/// Parsed contents of a pricing file.
///
/// Only `pricable` and `rows` are interpreted. Every other top-level
/// field is captured in `extra` and written back untouched, so files can
/// carry metadata this tool knows nothing about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceDocument {
    /// Field names whose values are adjustable prices, in declared order.
    /// Empty means a no-op run.
    #[serde(default)]
    pub pricable: Vec<String>,

    /// Pricing records, in declared order.
    #[serde(default)]
    pub rows: Vec<PriceRow>,

    /// Unrecognized top-level fields, preserved on write-back.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PriceDocument {
    /// Load a pricing document from disk.
    pub fn load(path: &Path) -> Result<Self, PricingError> {
        let contents = fs::read_to_string(path).map_err(|source| PricingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| PricingError::MalformedDocument {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Rewrite the file in full, pretty-printed for human review.
    pub fn save(&self, path: &Path) -> Result<(), PricingError> {
        let json =
            serde_json::to_string_pretty(self).map_err(|source| PricingError::MalformedDocument {
                path: path.to_path_buf(),
                source,
            })?;
        fs::write(path, json + "\n").map_err(|source| PricingError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
