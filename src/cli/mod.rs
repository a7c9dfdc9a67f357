//! Command-line interface for repricer
//!
//! Single command, no subcommands: parse the percentage once, resolve the
//! target files, then update them one at a time. Per-file failures are
//! reported and skipped; only a bad percentage aborts the run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::console;
use crate::errors::PricingError;
use crate::pricing::{apply_multiplier, parse_percentage, Multiplier, PriceDocument, RowChange};
use crate::selection::{self, SelectionMode};

#[derive(Parser)]
#[command(name = "repricer")]
#[command(version)]
#[command(about = "Bulk percentage updater for tiered JSON pricing files", long_about = None)]
pub struct Cli {
    /// Percentage change (e.g. "6", "6%", "-6%", "-1.5")
    #[arg(short = 'p', long, allow_hyphen_values = true)]
    pub percent: String,

    /// Specific files to process (bypasses keyword discovery)
    #[arg(long, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Keywords to match in file names; omit to match every pricing file
    #[arg(long, num_args = 1..)]
    pub keywords: Vec<String>,

    /// Process all matching files without confirmation
    #[arg(long)]
    pub all: bool,

    /// List matching files and exit without modifying anything
    #[arg(long)]
    pub list: bool,

    /// Directory to search for pricing files
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Execute the update pipeline.
    pub fn execute(self) -> Result<()> {
        let multiplier = parse_percentage(&self.percent)?;
        debug!(%multiplier, "Parsed percentage expression");

        // Keyword discovery only runs when no explicit files were given.
        let candidates = if self.files.is_empty() {
            selection::find_matching_files(&self.dir, &self.keywords)
                .with_context(|| format!("Failed to scan {}", self.dir.display()))?
        } else {
            Vec::new()
        };

        if self.list {
            console::header("MATCHING FILES");
            console::info(&format!("Found {} matching files:", candidates.len()));
            for path in &candidates {
                println!("  • {}", path.display());
            }
            return Ok(());
        }

        let mode = if !self.files.is_empty() {
            SelectionMode::Explicit(self.files.clone())
        } else if self.all {
            SelectionMode::Unconditional
        } else {
            SelectionMode::Interactive
        };

        let targets = selection::resolve_targets(mode, &candidates)
            .context("Failed to read selection input")?;

        if targets.is_empty() {
            console::warning("No files selected for processing.");
            return Ok(());
        }

        console::subheader(&format!("SELECTED FILES ({})", targets.len()));
        for path in &targets {
            console::success(&path.display().to_string());
        }

        console::header("PRICE UPDATE PROCESS");

        let mut processed = 0usize;
        for (i, path) in targets.iter().enumerate() {
            console::subheader(&format!(
                "Processing {} ({}/{})",
                path.display(),
                i + 1,
                targets.len()
            ));
            match update_pricing_file(path, multiplier) {
                Ok(()) => processed += 1,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Skipping file");
                    console::error(&format!("Failed to process {}: {}", path.display(), err));
                }
            }
        }

        console::header("PROCESS COMPLETED");
        console::success(&format!(
            "Successfully processed {} of {} files",
            processed,
            targets.len()
        ));
        Ok(())
    }
}

/// Load one pricing file, adjust its pricable tiers, and rewrite it.
fn update_pricing_file(path: &Path, multiplier: Multiplier) -> Result<(), PricingError> {
    let change = (multiplier - Decimal::ONE) * Decimal::ONE_HUNDRED;
    let sign = if change.is_sign_negative() { "" } else { "+" };

    let mut doc = PriceDocument::load(path)?;

    console::info(&format!("Pricable tiers: {}", doc.pricable.join(", ")));
    console::info(&format!(
        "Applying {}{}% price change",
        sign,
        change.round_dp(1)
    ));

    let trace = apply_multiplier(&mut doc, multiplier);
    report_changes(&trace);

    doc.save(path)?;
    console::success(&format!("Updated {} successfully!", path.display()));
    Ok(())
}

fn report_changes(trace: &[RowChange]) {
    for row in trace {
        println!();
        println!("Updating row: {}", row.label);
        for change in &row.changes {
            println!("  ${:.2} → ${:.2} ({})", change.old, change.new, change.tier);
        }
    }
}
