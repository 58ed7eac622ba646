//! Type-safe price representation using decimal arithmetic.
//!
//! All amounts are US dollars. Rounding to cents is explicit: callers decide
//! where in a calculation the value is rounded, and [`Price::rounded`] is
//! the only place the rounding rule lives.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places kept after rounding.
pub const CENT_SCALE: u32 = 2;

/// A dollar amount.
///
/// ```
/// use furniture_shop_core::Price;
///
/// let chair = Price::from_cents(2550);
/// assert_eq!(chair.to_string(), "$25.50");
/// assert_eq!(chair.times(2).to_string(), "$51.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal dollar amount. No rounding is applied.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, CENT_SCALE))
    }

    /// Returns the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Round to whole cents, midpoint away from zero. The result always
    /// carries exactly two decimal places.
    #[must_use]
    pub fn rounded(self) -> Self {
        let mut amount = self
            .0
            .round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero);
        amount.rescale(CENT_SCALE);
        Self(amount)
    }

    /// Multiply by a quantity. The result is not rounded.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Multiply by a rate such as a tax rate. The result is not rounded.
    #[must_use]
    pub fn scaled(self, rate: Decimal) -> Self {
        Self(self.0 * rate)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
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
    fn test_from_cents() {
        assert_eq!(Price::from_cents(4995).amount(), Decimal::new(4995, 2));
    }

    #[test]
    fn test_display_pads_to_two_places() {
        assert_eq!(Price::from_cents(4500).to_string(), "$45.00");
        assert_eq!(Price::new(Decimal::new(45, 0)).to_string(), "$45.00");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_rounded_midpoint_goes_up() {
        // 0.125 -> 0.13, not banker's 0.12
        let price = Price::new(Decimal::new(125, 3));
        assert_eq!(price.rounded(), Price::from_cents(13));
    }

    #[test]
    fn test_rounded_truncates_below_midpoint() {
        let price = Price::new(Decimal::new(151_425, 4));
        assert_eq!(price.rounded(), Price::from_cents(1514));
    }

    #[test]
    fn test_rounded_pads_scale() {
        let json = serde_json::to_string(&Price::new(Decimal::new(45, 0)).rounded()).unwrap();
        assert_eq!(json, "\"45.00\"");
    }

    #[test]
    fn test_times_and_sum() {
        let total: Price = [Price::from_cents(2550).times(2), Price::from_cents(4995)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(10095));
    }

    #[test]
    fn test_scaled() {
        let tax = Price::from_cents(2489).scaled(Decimal::new(15, 2)).rounded();
        assert_eq!(tax, Price::from_cents(373));
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Price::from_cents(7362)).unwrap();
        assert_eq!(json, "\"73.62\"");

        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Price::from_cents(7362));
    }
}
