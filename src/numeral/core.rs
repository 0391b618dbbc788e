use std::{cmp::Ordering, str::FromStr};

use crate::{
    error::NumeralError,
    numeral::{
        grammar,
        operand::{IntoOperand, Operand},
    },
};

/// Smallest decimal representable as a numeral.
pub const MIN_VALUE: u16 = 1;
/// Largest decimal representable as a numeral.
pub const MAX_VALUE: u16 = 3999;

/// Encoding table, ordered from the largest value down to `1`.
const ENCODING: [(u16, &str); 13] = [(1000, "M"),
                                     (900, "CM"),
                                     (500, "D"),
                                     (400, "CD"),
                                     (100, "C"),
                                     (90, "XC"),
                                     (50, "L"),
                                     (40, "XL"),
                                     (10, "X"),
                                     (9, "IX"),
                                     (5, "V"),
                                     (4, "IV"),
                                     (1, "I")];

/// Subtractive pairs, consumed before single letters when decoding.
const SUBTRACTIVE_PAIRS: [(&str, u16); 6] =
    [("CM", 900), ("CD", 400), ("XC", 90), ("XL", 40), ("IX", 9), ("IV", 4)];

/// Value of a single numeral letter.
const fn letter_value(letter: char) -> u16 {
    match letter {
        'M' => 1000,
        'D' => 500,
        'C' => 100,
        'L' => 50,
        'X' => 10,
        'V' => 5,
        'I' => 1,
        _ => 0,
    }
}

/// An immutable Roman numeral.
///
/// A `Numeral` holds a decimal in `[1, 3999]` and renders its canonical Roman
/// form on demand. It can only be built from a string that satisfies the
/// numeral grammar or from a decimal inside the range, so every instance
/// has exactly one canonical spelling.
///
/// Numerals are ordered by their decimal value.
///
/// # Example
/// ```
/// use numera::numeral::Numeral;
///
/// let year = Numeral::parse("MCMXCIV").unwrap();
/// assert_eq!(year.to_decimal(), 1994);
/// assert_eq!(Numeral::from_decimal(1994).unwrap().to_string(), "MCMXCIV");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Numeral {
    value: u16,
}

impl Numeral {
    /// Parses a Roman numeral.
    ///
    /// The input is validated by the four-phase grammar scanner and then
    /// decoded: every subtractive pair present is consumed first, and the
    /// remaining letters are summed by count and value.
    ///
    /// # Errors
    /// Returns [`NumeralError::Grammar`] if the input is empty, contains
    /// lowercase or foreign characters, or is not a strictly formed numeral.
    pub fn parse(input: &str) -> Result<Self, NumeralError> {
        grammar::validate(input)?;

        let mut remaining = input.to_string();
        let mut value = 0;

        for (pair, pair_value) in SUBTRACTIVE_PAIRS {
            if let Some(index) = remaining.find(pair) {
                value += pair_value;
                remaining.replace_range(index..index + pair.len(), "");
            }
        }

        value += remaining.chars().map(letter_value).sum::<u16>();

        Ok(Self { value })
    }

    /// Builds a numeral from a decimal.
    ///
    /// # Errors
    /// Returns [`NumeralError::Range`] if `value` is outside `[1, 3999]`.
    pub fn from_decimal(value: i64) -> Result<Self, NumeralError> {
        Self::from_wide(i128::from(value))
    }

    /// Builds a numeral from an intermediate arithmetic result.
    pub(crate) fn from_wide(value: i128) -> Result<Self, NumeralError> {
        u16::try_from(value).ok()
                            .filter(|v| (MIN_VALUE..=MAX_VALUE).contains(v))
                            .map(|value| Self { value })
                            .ok_or(NumeralError::Range { value })
    }

    /// Returns the decimal value of the numeral.
    #[must_use]
    pub const fn to_decimal(self) -> u16 {
        self.value
    }

    /// Returns the decimal value widened for intermediate arithmetic.
    pub(crate) fn wide(self) -> i128 {
        i128::from(self.value)
    }

    /// Renders the canonical Roman form.
    ///
    /// Walks the encoding table from `M` down to `I`, appending each symbol
    /// while its value still fits into what is left.
    #[must_use]
    pub fn to_canonical(self) -> String {
        let mut remaining = self.value;
        let mut numeral = String::new();

        for (value, symbol) in ENCODING {
            while remaining >= value {
                numeral.push_str(symbol);
                remaining -= value;
            }
        }

        numeral
    }

    /// Compares the numeral against any accepted operand shape.
    ///
    /// # Errors
    /// Returns an error if `other` cannot be coerced to an operand, for
    /// example text that is not a valid numeral.
    ///
    /// # Example
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use numera::numeral::Numeral;
    ///
    /// let ten = Numeral::parse("X").unwrap();
    /// assert_eq!(ten.compare("L").unwrap(), Ordering::Less);
    /// assert_eq!(ten.compare(5_i64).unwrap(), Ordering::Greater);
    /// assert!(ten.compare("ten").is_err());
    /// ```
    pub fn compare<T: IntoOperand>(&self, other: T) -> Result<Ordering, NumeralError> {
        let other: Operand = other.into_operand()?;
        Ok(self.wide().cmp(&other.decimal()))
    }

    /// Tests the numeral for equality against any accepted operand shape.
    ///
    /// # Errors
    /// Returns an error if `other` cannot be coerced to an operand.
    pub fn equals<T: IntoOperand>(&self, other: T) -> Result<bool, NumeralError> {
        Ok(self.compare(other)? == Ordering::Equal)
    }
}

impl std::fmt::Display for Numeral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_canonical())
    }
}

impl FromStr for Numeral {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<i64> for Numeral {
    type Error = NumeralError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Numeral> for u16 {
    fn from(numeral: Numeral) -> Self {
        numeral.value
    }
}

impl From<Numeral> for i64 {
    fn from(numeral: Numeral) -> Self {
        Self::from(numeral.value)
    }
}

impl PartialEq<i64> for Numeral {
    fn eq(&self, other: &i64) -> bool {
        i64::from(self.value) == *other
    }
}

impl PartialOrd<i64> for Numeral {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(i64::from(self.value).cmp(other))
    }
}

impl std::ops::Add for Numeral {
    type Output = Result<Self, NumeralError>;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_wide(self.wide() + rhs.wide())
    }
}

impl std::ops::Sub for Numeral {
    type Output = Result<Self, NumeralError>;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_wide(self.wide() - rhs.wide())
    }
}

impl std::ops::Mul for Numeral {
    type Output = Result<Self, NumeralError>;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_wide(self.wide() * rhs.wide())
    }
}
