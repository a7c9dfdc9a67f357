//! Row-walking price updates

use rust_decimal::Decimal;
use serde_json::Value;

use super::adjust::{adjust_price, decimal_from_number, number_from_decimal};
use super::document::PriceDocument;
use super::percent::Multiplier;

/// Label used in the change trace for rows without a `size` field.
const UNKNOWN_SIZE: &str = "Unknown size";

/// Price change applied to a single tier field.
#[derive(Debug, Clone, PartialEq)]
pub struct TierChange {
    pub tier: String,
    pub old: Decimal,
    pub new: Decimal,
}

/// Changes applied to one row, labeled by its `size` field when present.
#[derive(Debug, Clone, PartialEq)]
pub struct RowChange {
    pub label: String,
    pub changes: Vec<TierChange>,
}

/// Adjust every pricable numeric field in the document.
///
/// Rows are walked in declared order and, within each row, tiers in
/// declared `pricable` order. Fields that are absent or non-numeric are
/// passed through untouched. Returns one `RowChange` per row, in row
/// order, for the console trace.
pub fn apply_multiplier(doc: &mut PriceDocument, multiplier: Multiplier) -> Vec<RowChange> {
    let pricable = &doc.pricable;
    let mut trace = Vec::with_capacity(doc.rows.len());

    for row in doc.rows.iter_mut() {
        let label = row
            .get("size")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_SIZE)
            .to_string();
        let mut changes = Vec::new();

        for tier in pricable {
            let Some(Value::Number(number)) = row.get(tier) else {
                continue;
            };
            let Some(old) = decimal_from_number(number) else {
                continue;
            };
            let new = adjust_price(old, multiplier);
            if let Some(encoded) = number_from_decimal(new) {
                row.insert(tier.clone(), Value::Number(encoded));
                changes.push(TierChange {
                    tier: tier.clone(),
                    old,
                    new,
                });
            }
        }

        trace.push(RowChange { label, changes });
    }

    trace
}
