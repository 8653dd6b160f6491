//! Property-based tests for conversion arithmetic.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::{FX_DECIMAL_PLACES, convert_amount};

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Conversion results never carry more than the standard scale.
    #[test]
    fn prop_convert_rounds_to_standard_scale(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let result = convert_amount(amount, rate, FX_DECIMAL_PLACES);
        let scaled = result * Decimal::from(10_000);
        prop_assert_eq!(
            scaled,
            scaled.round(),
            "Result {} should have at most 4 decimal places",
            result
        );
    }

    /// Conversion is deterministic.
    #[test]
    fn prop_convert_is_deterministic(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        prop_assert_eq!(
            convert_amount(amount, rate, FX_DECIMAL_PLACES),
            convert_amount(amount, rate, FX_DECIMAL_PLACES)
        );
    }

    /// A unit rate preserves the amount (up to scale extension).
    #[test]
    fn prop_unit_rate_is_identity(amount in positive_amount()) {
        let result = convert_amount(amount, Decimal::ONE, FX_DECIMAL_PLACES);
        prop_assert_eq!(result, amount);
    }
}
