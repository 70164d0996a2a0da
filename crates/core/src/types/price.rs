//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative monetary amount.
///
/// Prices use decimal arithmetic so cart and order totals never accumulate
/// float error. The invariant `amount >= 0` is enforced at every
/// construction site, including deserialization.
///
/// ## Examples
///
/// ```
/// use moma_core::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Decimal::new(44900, 2)).unwrap(); // 449.00
/// assert_eq!(price.times(2), Decimal::new(89800, 2));
/// assert!(Price::new(Decimal::from(-1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Price from whole currency units. Infallible: `u32` cannot go negative.
    #[must_use]
    pub fn from_major(units: u32) -> Self {
        Self(Decimal::from(units))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The total for `quantity` units at this price.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        assert!(Price::new(Decimal::from(-5)).is_err());
        assert!(Price::new(Decimal::ZERO).is_ok());
        assert!(Price::new(Decimal::from(299)).is_ok());
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Price::from_major(299).amount(), Decimal::from(299));
    }

    #[test]
    fn test_times() {
        let price = Price::new(Decimal::from(149)).unwrap();
        assert_eq!(price.times(0), Decimal::ZERO);
        assert_eq!(price.times(3), Decimal::from(447));
    }

    #[test]
    fn test_deserialize_revalidates() {
        let ok: Result<Price, _> = serde_json::from_str("\"19.99\"");
        assert!(ok.is_ok());
        let bad: Result<Price, _> = serde_json::from_str("\"-19.99\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_ordering() {
        let low = Price::new(Decimal::from(69)).unwrap();
        let high = Price::new(Decimal::from(449)).unwrap();
        assert!(low < high);
    }
}
