use crate::{error::ConversionError, numeral::Numeral};

/// Substitution of numerals and decimals inside free text.
pub mod text;
/// Random numerals drawn uniformly from a range.
pub mod random;

pub use self::{
    random::{random_numeral, random_numeral_with},
    text::{replace_decimals_in_text, replace_numerals_in_text},
};

/// Converts a decimal to its canonical Roman numeral.
///
/// # Errors
/// Returns [`ConversionError::InvalidInput`] if `number` is outside
/// `[1, 3999]`.
///
/// # Example
/// ```
/// use numera::convert::to_numeral;
///
/// assert_eq!(to_numeral(3999).unwrap(), "MMMCMXCIX");
/// assert!(to_numeral(0).is_err());
/// ```
pub fn to_numeral(number: i64) -> Result<String, ConversionError> {
    Numeral::from_decimal(number).map(|numeral| numeral.to_string())
                                 .map_err(invalid_input)
}

/// Converts a Roman numeral to its decimal.
///
/// # Errors
/// Returns [`ConversionError::InvalidInput`] if `numeral` is not a valid
/// numeral.
///
/// # Example
/// ```
/// use numera::convert::from_numeral;
///
/// assert_eq!(from_numeral("MMMCMXCIX").unwrap(), 3999);
/// assert!(from_numeral("MMMM").is_err());
/// ```
pub fn from_numeral(numeral: &str) -> Result<i64, ConversionError> {
    Numeral::parse(numeral).map(i64::from).map_err(invalid_input)
}

fn invalid_input(error: impl std::fmt::Display) -> ConversionError {
    ConversionError::InvalidInput { details: error.to_string() }
}
