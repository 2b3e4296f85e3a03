//! Conversion

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

/// Errors raised by checked conversions.
#[derive(Debug, Error, PartialEq)]
pub enum ConversionError {
    /// The product does not fit in a [`Decimal`].
    #[error("converted amount overflowed the decimal range")]
    Overflow,
}

/// Converts an amount by multiplying it with a conversion rate.
///
/// Floating point semantics pass straight through: a `NaN` or infinite input
/// yields a `NaN` or infinite result.
pub fn convert_price(amount: f64, conversion_rate: f64) -> f64 {
    let converted = amount * conversion_rate;

    if !converted.is_finite() {
        debug!(amount, conversion_rate, "conversion produced a non-finite amount");
    }

    converted
}

/// Converts a decimal amount with a decimal rate. No rounding is applied.
///
/// # Errors
///
/// - [`ConversionError::Overflow`]: the product is outside the [`Decimal`] range.
pub fn convert_decimal(
    amount: Decimal,
    conversion_rate: Decimal,
) -> Result<Decimal, ConversionError> {
    amount
        .checked_mul(conversion_rate)
        .ok_or(ConversionError::Overflow)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn convert_price_multiplies() {
        assert!(
            (convert_price(-5.0, 2.0) + 10.0).abs() < f64::EPSILON,
            "-5 * 2 should be -10"
        );
        assert!(
            convert_price(0.0, 3.5).abs() < f64::EPSILON,
            "zero amount stays zero"
        );
        assert!(
            convert_price(42.0, 0.0).abs() < f64::EPSILON,
            "zero rate gives zero"
        );
    }

    #[test]
    fn convert_price_matches_multiplication_bitwise() {
        let cases = [(19.99, 1.1), (0.1, 0.2), (-3.25, -4.0), (1e308, 1e-308)];

        for (amount, rate) in cases {
            assert_eq!(
                convert_price(amount, rate).to_bits(),
                (amount * rate).to_bits(),
                "{amount} * {rate}"
            );
        }
    }

    #[test]
    fn convert_price_propagates_nan_and_infinity() {
        assert!(convert_price(f64::NAN, 2.0).is_nan(), "NaN amount propagates");
        assert!(convert_price(1.0, f64::NAN).is_nan(), "NaN rate propagates");
        assert!(
            convert_price(f64::INFINITY, 2.0).is_infinite(),
            "infinity propagates"
        );
        assert!(convert_price(f64::INFINITY, 0.0).is_nan(), "infinity times zero is NaN");
    }

    #[test]
    fn convert_decimal_is_exact() -> TestResult {
        let converted = convert_decimal(Decimal::new(1999, 2), Decimal::new(11, 1))?;

        assert_eq!(converted, Decimal::new(21989, 3));

        Ok(())
    }

    #[test]
    fn convert_decimal_overflow_returns_error() {
        assert_eq!(
            convert_decimal(Decimal::MAX, Decimal::TWO),
            Err(ConversionError::Overflow)
        );
    }
}
