//! Target file selection: keyword discovery plus mode resolution

pub mod discovery;
pub mod interactive;

pub use discovery::find_matching_files;
pub use interactive::{parse_selection, select_files_interactively, Selection};

use std::path::PathBuf;

use crate::console;
use crate::errors::PricingError;

/// How the final target list is chosen. Modes are mutually exclusive and
/// resolved in this priority order by the CLI.
#[derive(Debug, Clone)]
pub enum SelectionMode {
    /// Paths named on the command line; missing ones are dropped with a
    /// warning, never fatally.
    Explicit(Vec<PathBuf>),
    /// Every discovered candidate, no confirmation.
    Unconditional,
    /// Numbered prompt over the discovered candidates.
    Interactive,
}

/// Resolve the final list of files to process.
pub fn resolve_targets(
    mode: SelectionMode,
    candidates: &[PathBuf],
) -> std::io::Result<Vec<PathBuf>> {
    match mode {
        SelectionMode::Explicit(paths) => {
            let mut targets = Vec::new();
            for path in paths {
                if path.exists() {
                    targets.push(path);
                } else {
                    console::warning(&PricingError::MissingFile(path).to_string());
                }
            }
            Ok(targets)
        }
        SelectionMode::Unconditional => Ok(candidates.to_vec()),
        SelectionMode::Interactive => interactive::select_files_interactively(candidates),
    }
}
