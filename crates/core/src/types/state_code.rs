//! Two-letter US state abbreviation type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The 50 US states plus the District of Columbia.
pub const STATE_ABBREVIATIONS: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", //
    "HI", "ID", "IL", "IN", "IA", "KS", "KY", "LA", "ME", "MD", //
    "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", //
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", //
    "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY", //
    "DC",
];

/// Errors that can occur when parsing a [`StateCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StateCodeError {
    /// The normalized input is not a known abbreviation.
    #[error("\"{0}\" is not a valid U.S. state abbreviation. Please try again.")]
    Unknown(String),
}

/// A validated shipping destination.
///
/// Parsing trims surrounding whitespace and uppercases the input, so
/// `" ca "` and `"CA"` produce the same code.
///
/// ```
/// use furniture_shop_core::StateCode;
///
/// assert_eq!(StateCode::parse(" ny ").unwrap().as_str(), "NY");
/// assert!(StateCode::parse("ZZ").is_err());
/// assert!(StateCode::parse("").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct StateCode(String);

impl StateCode {
    /// Parse a `StateCode` from raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`StateCodeError::Unknown`] carrying the normalized input if
    /// it is not one of [`STATE_ABBREVIATIONS`].
    pub fn parse(s: &str) -> Result<Self, StateCodeError> {
        let normalized = s.trim().to_uppercase();

        if STATE_ABBREVIATIONS.contains(&normalized.as_str()) {
            Ok(Self(normalized))
        } else {
            Err(StateCodeError::Unknown(normalized))
        }
    }

    /// Returns the abbreviation as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for StateCode {
    type Err = StateCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for StateCode {
    type Error = StateCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StateCode> for String {
    fn from(code: StateCode) -> Self {
        code.0
    }
}

impl AsRef<str> for StateCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
