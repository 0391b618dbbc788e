/// Tokenizes lines of the command language.
///
/// Splits a line into statements on the `;` separator and a statement into
/// its whitespace separated words.
pub mod lexer;
/// Statement parsing.
///
/// Turns one statement into a [`command::Command`]: an operation keyword,
/// classified into one of the four statement categories, and its argument
/// tokens.
pub mod command;
/// Runtime values.
///
/// Declares the [`value::Value`] enum produced by token resolution and by
/// every operation, and the kind tag recorded with stored variables.
pub mod value;
/// Variable storage.
///
/// Named bindings of numerals or integers. A name must not itself be a valid
/// numeral, otherwise it could never be told apart from a literal.
pub mod variable;
/// Token resolution.
///
/// Resolves a token to a numeral literal, an integer literal or the value of
/// a variable, in that order.
pub mod resolver;
/// Statement handlers.
///
/// One handler per statement category, all sharing the same capability:
/// execute a command against the context and optionally yield a value.
pub mod handler;
/// The interpreter and its context.
///
/// Splits a line into statements, dispatches each to the handler of its
/// category, and collects results while isolating per-statement failures.
pub mod core;

pub use self::core::{Execution, Interpreter, StatementFailure};
