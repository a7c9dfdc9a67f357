//! Ceiling-to-cent price adjustment

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Number;

use super::percent::Multiplier;

/// Apply a multiplier to a price and round up to the next whole cent.
///
/// Rounding is toward positive infinity for increases and decreases
/// alike, so truncating a fractional cent can never shave the charged
/// amount. An amount already on a cent boundary is returned unchanged;
/// the arithmetic is exact decimal, so no tolerance fudging is needed.
pub fn adjust_price(value: Decimal, multiplier: Multiplier) -> Decimal {
    (value * multiplier).round_dp_with_strategy(2, RoundingStrategy::ToPositiveInfinity)
}

/// Convert a JSON number into an exact decimal.
///
/// Returns `None` for numbers outside decimal range; callers treat that
/// the same as a non-numeric field and leave it alone.
pub fn decimal_from_number(number: &Number) -> Option<Decimal> {
    if let Some(i) = number.as_i64() {
        Some(Decimal::from(i))
    } else if let Some(u) = number.as_u64() {
        Some(Decimal::from(u))
    } else {
        number.as_f64().and_then(Decimal::from_f64)
    }
}

/// Convert an adjusted price back into a JSON number.
pub fn number_from_decimal(value: Decimal) -> Option<Number> {
    value.to_f64().and_then(Number::from_f64)
}
