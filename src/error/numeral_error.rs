use crate::numeral::grammar::Phase;

/// Explains why a string was rejected by the numeral grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarReason {
    /// The input was empty.
    Empty,
    /// The input contains a character that is not one of `MDCLXVI`.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
    /// Every character is a numeral symbol, but input remained after the
    /// scanner could not advance any further.
    Unexpected {
        /// The unconsumed remainder of the input.
        remainder: String,
        /// The last phase that was able to consume input.
        after:     Phase,
    },
}

impl std::fmt::Display for GrammarReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "input is empty"),
            Self::InvalidCharacter { character, position } => {
                write!(f, "invalid character '{character}' at position {position}")
            },
            Self::Unexpected { remainder, after } => {
                write!(f, "unexpected '{remainder}' after the {after} phase")
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
/// Represents all errors raised by numeral parsing, encoding and arithmetic.
pub enum NumeralError {
    /// The string does not satisfy the Roman numeral grammar.
    #[error("Invalid Roman numeral '{input}': {reason}.")]
    Grammar {
        /// The rejected input.
        input:  String,
        /// Why the scanner rejected it.
        reason: GrammarReason,
    },
    /// A decimal lies outside the representable range `[1, 3999]`.
    #[error("Value {value} is out of range, must be between 1 and 3999.")]
    Range {
        /// The offending decimal.
        value: i128,
    },
    /// The operand shape or the operator is not supported.
    #[error("Unsupported operation: {details}.")]
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
    },
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// Plain integer arithmetic left the range of a 64 bit integer.
    #[error("Integer overflow while trying to compute result.")]
    Overflow,
}
