/// Four-phase grammar scanner.
///
/// Validates a string against the strict Roman numeral grammar by scanning
/// the thousands, hundreds, tens and units phases in order, reporting the
/// phase at which scanning stopped when the input is rejected.
pub mod grammar;
/// The numeral value type.
///
/// Defines [`core::Numeral`], an immutable decimal in `[1, 3999]` that renders
/// its canonical Roman form on demand, together with the encoding and
/// decoding routines.
pub mod core;
/// Operand shapes accepted by comparison and arithmetic.
///
/// Numerals, numeral-shaped text and plain integers are coerced into the
/// closed [`operand::Operand`] union before any computation takes place.
pub mod operand;
/// Arithmetic over operands.
///
/// Holds the per-operator result table: which operand pairs produce a
/// numeral, a plain integer, a real quotient, text, or a type mismatch.
pub mod arithmetic;

pub use self::{
    arithmetic::{BinaryOperator, apply},
    core::{MAX_VALUE, MIN_VALUE, Numeral},
    operand::{IntoOperand, Operand},
};
