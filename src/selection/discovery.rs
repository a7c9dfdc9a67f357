//! Candidate file discovery by filename keyword matching

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::console;
use crate::errors::PricingError;

/// Extension recognized as a structured pricing file.
const PRICING_EXTENSION: &str = "json";

/// Find pricing files in `dir` whose names contain any of `keywords`.
///
/// Matching is a substring OR across keywords. With no keywords every
/// pricing file matches and a safety warning is printed, since the run
/// would be unscoped. Results are sorted lexicographically by file name.
pub fn find_matching_files(dir: &Path, keywords: &[String]) -> Result<Vec<PathBuf>, PricingError> {
    let entries = std::fs::read_dir(dir).map_err(|source| PricingError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut matches = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| PricingError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(PRICING_EXTENSION) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if keywords.is_empty() || keywords.iter().any(|kw| name.contains(kw.as_str())) {
            matches.push(path);
        }
    }

    matches.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if keywords.is_empty() {
        console::warning("No keywords provided - this will apply to ALL JSON files in the directory!");
        console::info(&format!("Found {} JSON files total", matches.len()));
    }
    debug!(dir = %dir.display(), count = matches.len(), "File discovery finished");

    Ok(matches)
}
