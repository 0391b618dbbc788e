use crate::{error::NumeralError, interpreter::value::Value, numeral::core::Numeral};

/// An operand of comparison or arithmetic, coerced from one of the accepted
/// shapes.
///
/// Numeral-shaped text is validated on the way in but keeps its own tag,
/// because a few operator pairs treat text differently from a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// A numeral value.
    Numeral(Numeral),
    /// Text that satisfies the numeral grammar.
    Text(Numeral),
    /// A plain integer.
    Plain(i64),
}

impl Operand {
    /// Coerces numeral-shaped text into an operand.
    ///
    /// # Errors
    /// Returns [`NumeralError::Grammar`] if the text is not a valid numeral.
    pub fn from_text(text: &str) -> Result<Self, NumeralError> {
        Numeral::parse(text).map(Self::Text)
    }

    /// Returns the decimal value of the operand, widened so that arithmetic
    /// between any two operands cannot overflow.
    #[must_use]
    pub fn decimal(&self) -> i128 {
        match self {
            Self::Numeral(n) | Self::Text(n) => n.wide(),
            Self::Plain(i) => i128::from(*i),
        }
    }

    /// Returns `true` for numerals and numeral-shaped text.
    #[must_use]
    pub const fn is_numeral_shaped(&self) -> bool {
        matches!(self, Self::Numeral(_) | Self::Text(_))
    }

    /// Short name of the operand shape, used in error messages.
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Numeral(_) => "numeral",
            Self::Text(_) => "text",
            Self::Plain(_) => "integer",
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeral(n) => write!(f, "{n}"),
            Self::Text(n) => write!(f, "\"{n}\""),
            Self::Plain(i) => write!(f, "{i}"),
        }
    }
}

/// Conversion of an accepted operand shape into an [`Operand`].
///
/// Anything that is not a numeral, numeral-shaped text or a plain integer is
/// reported as a failure instead of being coerced.
pub trait IntoOperand {
    /// Performs the coercion.
    ///
    /// # Errors
    /// Returns a grammar failure for text that is not a numeral, or a type
    /// mismatch for unsupported shapes.
    fn into_operand(self) -> Result<Operand, NumeralError>;
}

impl IntoOperand for Operand {
    fn into_operand(self) -> Result<Operand, NumeralError> {
        Ok(self)
    }
}

impl IntoOperand for Numeral {
    fn into_operand(self) -> Result<Operand, NumeralError> {
        Ok(Operand::Numeral(self))
    }
}

impl IntoOperand for &Numeral {
    fn into_operand(self) -> Result<Operand, NumeralError> {
        Ok(Operand::Numeral(*self))
    }
}

impl IntoOperand for i64 {
    fn into_operand(self) -> Result<Operand, NumeralError> {
        Ok(Operand::Plain(self))
    }
}

impl IntoOperand for &str {
    fn into_operand(self) -> Result<Operand, NumeralError> {
        Operand::from_text(self)
    }
}

impl IntoOperand for &String {
    fn into_operand(self) -> Result<Operand, NumeralError> {
        Operand::from_text(self)
    }
}

impl IntoOperand for &Value {
    fn into_operand(self) -> Result<Operand, NumeralError> {
        match self {
            Value::Numeral(n) => Ok(Operand::Numeral(*n)),
            Value::Integer(i) => Ok(Operand::Plain(*i)),
            Value::Text(text) => Operand::from_text(text),
            Value::Real(r) => {
                Err(NumeralError::TypeMismatch { details: format!("real value {r} is not a numeral or an integer") })
            },
        }
    }
}
