use crate::{
    error::NumeralError,
    interpreter::value::Value,
    numeral::{
        core::Numeral,
        operand::{IntoOperand, Operand},
    },
};

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, always producing a real quotient.
    Div,
    /// `//`, rounding toward negative infinity.
    FloorDiv,
    /// `%`, taking the sign of the divisor.
    Mod,
    /// `**`
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::Mod => "%",
            Self::Pow => "**",
        };
        f.write_str(symbol)
    }
}

/// Applies `op` to two operands of any accepted shape.
///
/// Both sides are coerced first, then the result type follows from the
/// operand pair:
///
/// | left        | right       | `+ - *`            | `/`    | `// % **`  |
/// |-------------|-------------|--------------------|--------|------------|
/// | numeral     | any         | numeral            | real   | mismatch   |
/// | text        | numeral     | text (`+`) or numeral | real | mismatch |
/// | integer     | numeral     | numeral            | real   | mismatch   |
/// | integer     | integer     | integer            | real   | integer    |
/// | text        | text/integer| mismatch           | mismatch | mismatch |
/// | integer     | text        | mismatch           | mismatch | mismatch |
///
/// A numeral result outside `[1, 3999]` is a range failure, never a clamped
/// or wrapped value. Adding a numeral to numeral-shaped text on its left
/// concatenates the two canonical forms.
///
/// # Errors
/// Returns a [`NumeralError`] when coercion fails, when the operand pair is
/// unsupported, when a numeral result leaves the range, or on division by
/// zero and integer overflow.
///
/// # Example
/// ```
/// use numera::{
///     interpreter::value::Value,
///     numeral::{BinaryOperator, Numeral, apply},
/// };
///
/// let ten = Numeral::parse("X").unwrap();
/// let five = Numeral::parse("V").unwrap();
///
/// let sum = apply(BinaryOperator::Add, ten, five).unwrap();
/// assert_eq!(sum, Value::Numeral(Numeral::parse("XV").unwrap()));
///
/// let text = apply(BinaryOperator::Add, "X", five).unwrap();
/// assert_eq!(text, Value::Text("XV".to_string()));
///
/// assert!(apply(BinaryOperator::Mod, ten, five).is_err());
/// ```
pub fn apply<L: IntoOperand, R: IntoOperand>(op: BinaryOperator,
                                             left: L,
                                             right: R)
                                             -> Result<Value, NumeralError> {
    use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};
    use Operand::{Numeral as Num, Plain, Text};

    let left = left.into_operand()?;
    let right = right.into_operand()?;

    match (op, &left, &right) {
        (Add, Text(l), Num(r)) => Ok(Value::Text(format!("{l}{r}"))),
        (_, Text(_), Text(_) | Plain(_)) | (_, Plain(_), Text(_)) => Err(mismatch(op, &left, &right)),
        (FloorDiv | Mod | Pow, l, r) if l.is_numeral_shaped() || r.is_numeral_shaped() => {
            Err(mismatch(op, &left, &right))
        },
        (Div, l, r) => divide(l.decimal(), r.decimal()),
        (_, Plain(a), Plain(b)) => plain(op, *a, *b),
        (Add | Sub | Mul, l, r) => {
            let (a, b) = (l.decimal(), r.decimal());
            let result = match op {
                Add => a + b,
                Sub => a - b,
                _ => a * b,
            };
            Numeral::from_wide(result).map(Value::Numeral)
        },
        (FloorDiv | Mod | Pow, ..) => Err(mismatch(op, &left, &right)),
    }
}

fn mismatch(op: BinaryOperator, left: &Operand, right: &Operand) -> NumeralError {
    NumeralError::TypeMismatch { details: format!("cannot apply '{op}' to {} {left} and {} {right}",
                                                  left.shape(),
                                                  right.shape()) }
}

#[allow(clippy::cast_precision_loss)]
fn divide(dividend: i128, divisor: i128) -> Result<Value, NumeralError> {
    if divisor == 0 {
        return Err(NumeralError::DivisionByZero);
    }
    Ok(Value::Real(dividend as f64 / divisor as f64))
}

/// Arithmetic between two plain integers.
#[allow(clippy::cast_precision_loss)]
fn plain(op: BinaryOperator, a: i64, b: i64) -> Result<Value, NumeralError> {
    use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};

    let result = match op {
        Add => a.checked_add(b),
        Sub => a.checked_sub(b),
        Mul => a.checked_mul(b),
        Div => return divide(i128::from(a), i128::from(b)),
        FloorDiv | Mod if b == 0 => return Err(NumeralError::DivisionByZero),
        FloorDiv => a.checked_div(b).map(|q| if a % b != 0 && (a < 0) != (b < 0) { q - 1 } else { q }),
        Mod => a.checked_rem(b).map(|r| if r != 0 && (r < 0) != (b < 0) { r + b } else { r }),
        Pow => match u32::try_from(b) {
            Ok(exponent) => a.checked_pow(exponent),
            Err(_) if b < 0 => {
                let exponent = i32::try_from(b).map_err(|_| NumeralError::Overflow)?;
                return Ok(Value::Real((a as f64).powi(exponent)));
            },
            Err(_) => None,
        },
    };

    result.map(Value::Integer).ok_or(NumeralError::Overflow)
}
