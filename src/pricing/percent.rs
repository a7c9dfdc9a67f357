//! Percentage expression parsing

use rust_decimal::Decimal;

use crate::errors::PricingError;

/// Decimal factor applied to every pricable field (e.g. 6% -> 1.06).
///
/// Kept as an exact decimal so adjustments never pick up binary float
/// noise at cent boundaries.
pub type Multiplier = Decimal;

/// Parse a percentage expression into a decimal multiplier.
///
/// Accepts "6", "6%", "-1.5", "-1.5%". A single trailing '%' is
/// stripped; more than one '%' anywhere is rejected, as is anything the
/// decimal parser does not accept.
pub fn parse_percentage(input: &str) -> Result<Multiplier, PricingError> {
    let trimmed = input.trim();

    if trimmed.matches('%').count() > 1 {
        return Err(PricingError::InvalidPercentage(input.to_string()));
    }

    let numeric = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();

    let value: Decimal = numeric
        .parse()
        .map_err(|_| PricingError::InvalidPercentage(input.to_string()))?;

    Ok(Decimal::ONE + value / Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plain_and_suffixed_forms_agree() {
        assert_eq!(parse_percentage("6").unwrap(), dec!(1.06));
        assert_eq!(parse_percentage("6%").unwrap(), dec!(1.06));
    }

    #[test]
    fn test_negative_fractional_percent() {
        assert_eq!(parse_percentage("-1.5%").unwrap(), dec!(0.985));
        assert_eq!(parse_percentage("-1.5").unwrap(), dec!(0.985));
        assert_eq!(parse_percentage("-6%").unwrap(), dec!(0.94));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(parse_percentage("  6% ").unwrap(), dec!(1.06));
        assert_eq!(parse_percentage("\t-1.5\n").unwrap(), dec!(0.985));
    }

    #[test]
    fn test_no_bounds_checking() {
        // Total markdown and beyond are accepted and propagated.
        assert_eq!(parse_percentage("-100").unwrap(), Decimal::ZERO);
        assert_eq!(parse_percentage("-150%").unwrap(), dec!(-0.5));
        assert_eq!(parse_percentage("300").unwrap(), dec!(4));
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(parse_percentage("abc").is_err());
        assert!(parse_percentage("").is_err());
        assert!(parse_percentage("   ").is_err());
        assert!(parse_percentage("6%%").is_err());
        assert!(parse_percentage("%6%").is_err());
        assert!(parse_percentage("%6").is_err());
        assert!(parse_percentage("6.5.1").is_err());
    }

    #[test]
    fn test_error_carries_original_input() {
        let err = parse_percentage("6%%").unwrap_err();
        assert!(err.to_string().contains("6%%"));
    }
}
