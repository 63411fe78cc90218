//! Hourly rate value type.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::ValidationError;

/// A strictly positive hourly rate in pounds.
///
/// ```
/// use travel_cost_server::domain::HourlyRate;
///
/// let rate = HourlyRate::parse(" 45.00 ").unwrap();
/// assert_eq!(rate.to_string(), "45.00");
///
/// assert!(HourlyRate::parse("0").is_err());
/// assert!(HourlyRate::parse("-5").is_err());
/// assert!(HourlyRate::parse("lots").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HourlyRate(Decimal);

impl HourlyRate {
    /// Wrap a decimal, rejecting zero and negative values.
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value <= Decimal::ZERO {
            return Err(ValidationError::InvalidRate {
                reason: "must be greater than zero",
            });
        }
        Ok(HourlyRate(value))
    }

    /// Parse a rate as typed into the form.
    ///
    /// Exponent notation (`1e-7`, `1e21`) is accepted too, since that is how
    /// JSON numbers at either end of the range are rendered.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        let value = Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .map_err(|_| ValidationError::InvalidRate {
                reason: "not a decimal number",
            })?;
        Self::new(value)
    }

    /// Returns the rate as a decimal.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for HourlyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        assert_eq!(HourlyRate::parse("45").unwrap().value(), Decimal::from(45));
        assert_eq!(
            HourlyRate::parse("45.50").unwrap().value(),
            Decimal::new(4550, 2)
        );
        assert_eq!(
            HourlyRate::parse("0.01").unwrap().value(),
            Decimal::new(1, 2)
        );
    }

    #[test]
    fn parse_exponent_notation() {
        assert_eq!(
            HourlyRate::parse("1e-7").unwrap().value(),
            Decimal::new(1, 7)
        );
        assert_eq!(
            HourlyRate::parse("1e21").unwrap().value(),
            Decimal::from_i128_with_scale(1_000_000_000_000_000_000_000, 0)
        );
        assert_eq!(
            HourlyRate::parse("4.5e1").unwrap().value(),
            Decimal::from(45)
        );
        assert!(HourlyRate::parse("-1e2").is_err());
    }

    #[test]
    fn reject_non_positive() {
        assert!(matches!(
            HourlyRate::parse("0"),
            Err(ValidationError::InvalidRate { .. })
        ));
        assert!(matches!(
            HourlyRate::parse("0.00"),
            Err(ValidationError::InvalidRate { .. })
        ));
        assert!(matches!(
            HourlyRate::parse("-5"),
            Err(ValidationError::InvalidRate { .. })
        ));
    }

    #[test]
    fn reject_unparseable() {
        for raw in ["", " ", "abc", "£45", "45,00", "1.2.3"] {
            assert!(
                matches!(
                    HourlyRate::parse(raw),
                    Err(ValidationError::InvalidRate { .. })
                ),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn new_rejects_zero() {
        assert!(HourlyRate::new(Decimal::ZERO).is_err());
        assert!(HourlyRate::new(Decimal::ONE).is_ok());
    }
}
