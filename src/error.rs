/// Numeral errors.
///
/// Defines the failures raised while validating, encoding or computing with
/// Roman numerals: grammar violations, out-of-range decimals, unsupported
/// operand shapes and plain-integer arithmetic faults.
pub mod numeral_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while parsing and executing a
/// statement of the command language, such as malformed commands, unresolved
/// tokens or invalid variable names.
pub mod runtime_error;
/// Conversion errors.
///
/// The uniform failure surfaced by the conversion utilities to external
/// callers, which never need to distinguish the underlying numeral failure.
pub mod conversion_error;

pub use conversion_error::ConversionError;
pub use numeral_error::{GrammarReason, NumeralError};
pub use runtime_error::RuntimeError;
