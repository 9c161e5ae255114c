//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a valid decimal number.
    #[error("price is not a valid number: {0}")]
    Invalid(String),
    /// The price is negative.
    #[error("price cannot be negative")]
    Negative,
}

/// A product price.
///
/// The shop API carries prices as plain JSON numbers in a single
/// implicit currency, so this wraps a [`Decimal`] without a currency
/// code. Decimal arithmetic avoids the float rounding surprises a raw
/// `f64` would invite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Parse a `Price` from operator input, trimming surrounding
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty, not a decimal
    /// number, or negative.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(PriceError::Empty);
        }

        let amount: Decimal = s
            .parse()
            .map_err(|_| PriceError::Invalid(s.to_owned()))?;

        if amount.is_sign_negative() {
            return Err(PriceError::Negative);
        }

        Ok(Self(amount))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl std::str::FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(Price::parse("19.99").unwrap().amount(), Decimal::new(1999, 2));
        assert_eq!(Price::parse("0").unwrap().amount(), Decimal::ZERO);
        assert_eq!(Price::parse(" 5 ").unwrap().amount(), Decimal::new(5, 0));
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Price::parse(""), Err(PriceError::Empty)));
        assert!(matches!(Price::parse("  "), Err(PriceError::Empty)));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            Price::parse("cheap"),
            Err(PriceError::Invalid(_))
        ));
    }

    #[test]
    fn test_parse_negative() {
        assert!(matches!(Price::parse("-1.50"), Err(PriceError::Negative)));
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::parse("5").unwrap().to_string(), "5.00");
        assert_eq!(Price::parse("19.9").unwrap().to_string(), "19.90");
    }

    #[test]
    fn test_serde_json_number() {
        let price = Price::parse("12.5").unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "12.5");

        let parsed: Price = serde_json::from_str("12.5").unwrap();
        assert_eq!(parsed, price);
    }
}
