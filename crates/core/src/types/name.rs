//! Customer full name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`FullName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FullNameError {
    /// The input is empty or whitespace only.
    #[error("full name cannot be empty")]
    Empty,
    /// The input is too long.
    #[error("full name must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// The name an order is placed under.
///
/// ## Constraints
///
/// - Surrounding whitespace is trimmed
/// - Length after trimming: 1-120 characters
///
/// ## Examples
///
/// ```
/// use orbit_cafe_core::FullName;
///
/// assert_eq!(FullName::parse("  Ada Lovelace ").unwrap().as_str(), "Ada Lovelace");
/// assert!(FullName::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct FullName(String);

impl FullName {
    /// Maximum length of a full name, in characters.
    pub const MAX_LENGTH: usize = 120;

    /// Parse a `FullName` from user input.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty or longer than
    /// [`Self::MAX_LENGTH`] characters.
    pub fn parse(s: &str) -> Result<Self, FullNameError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FullNameError::Empty);
        }

        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(FullNameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for FullName {
    type Err = FullNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let name = FullName::parse("  Grace Hopper\n").unwrap();
        assert_eq!(name.as_str(), "Grace Hopper");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(FullName::parse(""), Err(FullNameError::Empty));
        assert_eq!(FullName::parse(" \t "), Err(FullNameError::Empty));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(FullName::MAX_LENGTH + 1);
        assert!(matches!(
            FullName::parse(&long),
            Err(FullNameError::TooLong { .. })
        ));
        assert!(FullName::parse(&"a".repeat(FullName::MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_length_counts_characters() {
        let accented = "é".repeat(FullName::MAX_LENGTH);
        assert!(FullName::parse(&accented).is_ok());
    }

    #[test]
    fn test_from_str_and_display() {
        let name: FullName = "Ada".parse().unwrap();
        assert_eq!(format!("{name}"), "Ada");
    }
}
