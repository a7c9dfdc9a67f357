//! Styled console output helpers
//!
//! Stateless free functions for the human-facing progress report. Output
//! here is not machine-parseable and is not a compatibility surface.

use owo_colors::OwoColorize;

const HEADER_WIDTH: usize = 60;
const SUBHEADER_WIDTH: usize = 50;

/// Print a success line with a checkmark.
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error line with a cross mark.
pub fn error(message: &str) {
    println!("{} {}", "✗".red().bold(), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print an informational line.
pub fn info(message: &str) {
    println!("{} {}", "ℹ".bright_blue(), message);
}

/// Print a full-width section header.
pub fn header(title: &str) {
    println!();
    println!("{}", "=".repeat(HEADER_WIDTH).bright_blue());
    println!("{:^width$}", title, width = HEADER_WIDTH);
    println!("{}", "=".repeat(HEADER_WIDTH).bright_blue());
}

/// Print a lighter section divider.
pub fn subheader(title: &str) {
    println!();
    println!("{}", "-".repeat(SUBHEADER_WIDTH).bright_blue());
    println!("{}", title.bold());
    println!("{}", "-".repeat(SUBHEADER_WIDTH).bright_blue());
}
