//! Item quantity parsing.

use core::num::NonZeroU32;

/// Errors that can occur when parsing a quantity.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// Input is blank, not a whole number, zero, or out of range.
    #[error("Please enter a valid quantity (a whole number greater than zero).")]
    Invalid(String),
}

/// Parse a positive whole-number quantity from raw user input.
///
/// Surrounding whitespace is ignored. Signs other than a leading `+`,
/// fractions, and trailing characters are rejected rather than truncated.
///
/// ```
/// use furniture_shop_core::parse_quantity;
///
/// assert_eq!(parse_quantity(" 3 ").unwrap().get(), 3);
/// assert!(parse_quantity("0").is_err());
/// assert!(parse_quantity("2.5").is_err());
/// ```
///
/// # Errors
///
/// Returns [`QuantityError::Invalid`] with the trimmed input.
pub fn parse_quantity(input: &str) -> Result<NonZeroU32, QuantityError> {
    let trimmed = input.trim();
    trimmed
        .parse::<NonZeroU32>()
        .map_err(|_| QuantityError::Invalid(trimmed.to_owned()))
}
