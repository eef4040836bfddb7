//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are accumulated exactly and only rounded to cents when formatted
//! for display.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A menu or order price in dollars.
///
/// Serializes as a JSON number (`3.5`), which is the layout the persisted
/// cart slot uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The unrounded decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// The price of `quantity` units, without rounding.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(Decimal::from(quantity)))
    }

    /// The amount rounded to cents (half away from zero).
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Format for display, e.g. `$3.50`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.2}", self.rounded())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rust_decimal::serde::float::deserialize(deserializer).map(Self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_cents() {
        assert_eq!(Price::from_cents(350).display(), "$3.50");
        assert_eq!(Price::ZERO.display(), "$0.00");
        assert_eq!(Price::new(Decimal::new(65, 1)).display(), "$6.50");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        assert_eq!(Price::new(Decimal::new(1005, 3)).display(), "$1.01");
        assert_eq!(Price::new(Decimal::new(1004, 3)).display(), "$1.00");
    }

    #[test]
    fn test_times_and_sum_are_exact() {
        let total: Price = [Price::from_cents(395).times(3), Price::from_cents(275)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(1460));
    }

    #[test]
    fn test_is_negative() {
        assert!(Price::from_cents(-1).is_negative());
        assert!(!Price::ZERO.is_negative());
        assert!(!Price::from_cents(1).is_negative());
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Price::from_cents(350)).unwrap();
        assert_eq!(json, "3.5");

        let parsed: Price = serde_json::from_str("3.95").unwrap();
        assert_eq!(parsed, Price::from_cents(395));
    }
}
