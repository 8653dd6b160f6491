//! Currency conversion logic.
//!
//! CRITICAL: Rounding strategy for multi-currency:
//! - Always round converted amounts to a fixed scale
//! - Use banker's rounding (round half to even)
//! - Keep the original amount around; conversion is for display and
//!   aggregation, never a replacement for the source value

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Scale used for converted amounts throughout the application.
pub const FX_DECIMAL_PLACES: u32 = 4;

/// Converts an amount using the given exchange rate.
///
/// Uses banker's rounding (round half to even) to minimize cumulative errors.
#[must_use]
pub fn convert_amount(amount: Decimal, rate: Decimal, decimal_places: u32) -> Decimal {
    let converted = amount * rate;
    converted.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}

/// Rounds a value with banker's rounding without applying a rate.
#[must_use]
pub fn round_amount(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_convert_amount() {
        // 100 USD * 1350 = 135,000 RWF
        let result = convert_amount(dec!(100), dec!(1350), 0);
        assert_eq!(result, dec!(135000));
    }

    #[test]
    fn test_convert_amount_standard_scale() {
        // 100 * 1.23456789 = 123.456789 -> rounds to 123.4568
        let result = convert_amount(dec!(100), dec!(1.23456789), FX_DECIMAL_PLACES);
        assert_eq!(result, dec!(123.4568));
    }

    #[test]
    fn test_convert_identity_rate() {
        let result = convert_amount(dec!(100.50), Decimal::ONE, FX_DECIMAL_PLACES);
        assert_eq!(result, dec!(100.5000));
    }

    #[test]
    fn test_bankers_rounding() {
        // Round half to even: 2.5 rounds to 2, 3.5 rounds to 4
        assert_eq!(convert_amount(dec!(1), dec!(2.5), 0), dec!(2));
        assert_eq!(convert_amount(dec!(1), dec!(3.5), 0), dec!(4));

        // 2.25 -> 2.2, 2.35 -> 2.4 at one decimal
        assert_eq!(round_amount(dec!(2.25), 1), dec!(2.2));
        assert_eq!(round_amount(dec!(2.35), 1), dec!(2.4));
    }
}
