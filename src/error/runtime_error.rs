use crate::{error::NumeralError, interpreter::command::Keyword};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
/// Represents all errors that can occur while executing a statement.
pub enum RuntimeError {
    /// The statement has the wrong shape: too few parts, an unknown keyword or
    /// the wrong number of arguments for its keyword.
    #[error("Invalid command - {details}")]
    MalformedCommand {
        /// Details about what is wrong with the statement.
        details: String,
    },
    /// A token is neither a numeral, an integer, nor a known variable.
    #[error("Invalid value '{token}' - cannot be parsed - Make sure it is a valid Roman numeral, integer or variable")]
    UnresolvedToken {
        /// The token that could not be resolved.
        token: String,
    },
    /// The assignment target is itself a valid Roman numeral.
    #[error("Invalid variable name '{name}' - cannot be a Roman numeral")]
    InvalidVariableName {
        /// The rejected name.
        name: String,
    },
    /// An all-digit token is too large to be represented.
    #[error("Literal '{token}' is too large.")]
    LiteralTooLarge {
        /// The offending token.
        token: String,
    },
    /// An arithmetic operation failed.
    #[error("Error in operation '{op}': {source}")]
    Operation {
        /// The keyword of the failing operation.
        op:     Keyword,
        /// The underlying failure.
        source: NumeralError,
    },
    /// A numeral failure outside of an arithmetic operation.
    #[error(transparent)]
    Numeral(#[from] NumeralError),
}
