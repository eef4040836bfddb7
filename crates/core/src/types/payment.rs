//! Payment methods offered at checkout.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PaymentMethod`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethodError {
    /// No method was selected.
    #[error("no payment method selected")]
    NotSelected,
    /// The value is not one of the offered methods.
    #[error("unsupported payment method: {0}")]
    Unsupported(String),
}

/// Payment method selected on the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Credit or debit card.
    Card,
    /// Cash on pickup.
    Cash,
    /// Mobile wallet.
    Wallet,
}

impl PaymentMethod {
    /// Every method offered, in form order.
    pub const ALL: [Self; 3] = [Self::Card, Self::Cash, Self::Wallet];

    /// The form value for this method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Cash => "cash",
            Self::Wallet => "wallet",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = PaymentMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.is_empty() {
            return Err(PaymentMethodError::NotSelected);
        }
        Self::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| PaymentMethodError::Unsupported(value.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_methods() {
        assert_eq!("card".parse::<PaymentMethod>().unwrap(), PaymentMethod::Card);
        assert_eq!("Cash".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
        assert_eq!(
            " wallet ".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::Wallet
        );
    }

    #[test]
    fn test_parse_empty_is_not_selected() {
        assert_eq!(
            "".parse::<PaymentMethod>(),
            Err(PaymentMethodError::NotSelected)
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "crypto".parse::<PaymentMethod>(),
            Err(PaymentMethodError::Unsupported(v)) if v == "crypto"
        ));
    }

    #[test]
    fn test_round_trips_through_as_str() {
        for method in PaymentMethod::ALL {
            assert_eq!(method.as_str().parse::<PaymentMethod>().unwrap(), method);
        }
    }
}
