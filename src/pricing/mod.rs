//! Percentage parsing and price adjustment core

pub mod adjust;
pub mod document;
pub mod percent;
pub mod update;

pub use adjust::adjust_price;
pub use document::{PriceDocument, PriceRow};
pub use percent::{parse_percentage, Multiplier};
pub use update::{apply_multiplier, RowChange, TierChange};
