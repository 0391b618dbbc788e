use log::trace;

use crate::{
    error::RuntimeError,
    interpreter::{core::EvalResult, value::Value, variable::VariableStore},
    numeral::{Numeral, grammar::is_numeral},
};

/// Resolves a single token to a value.
///
/// A resolver borrows the variable store it looks names up in, so it always
/// sees the bindings made by earlier statements.
#[derive(Debug, Clone, Copy)]
pub struct TokenResolver<'a> {
    variables: &'a VariableStore,
}

impl<'a> TokenResolver<'a> {
    /// Creates a resolver over `variables`.
    #[must_use]
    pub const fn new(variables: &'a VariableStore) -> Self {
        Self { variables }
    }

    /// Resolves `token`, trying in order:
    /// 1. a valid numeral, giving [`Value::Numeral`],
    /// 2. an all-digit literal, giving [`Value::Integer`],
    /// 3. the name of a known variable, giving its stored value.
    ///
    /// # Errors
    /// - [`RuntimeError::UnresolvedToken`] if none of the above applies.
    /// - [`RuntimeError::LiteralTooLarge`] for a digit string that does not
    ///   fit in 64 bits.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::{
    ///     resolver::TokenResolver, value::Value, variable::VariableStore,
    /// };
    ///
    /// let mut variables = VariableStore::new();
    /// variables.set_variable("a", Value::Integer(7)).unwrap();
    ///
    /// let resolver = TokenResolver::new(&variables);
    /// assert_eq!(resolver.resolve("12").unwrap(), Value::Integer(12));
    /// assert_eq!(resolver.resolve("a").unwrap(), Value::Integer(7));
    /// assert!(resolver.resolve("b").is_err());
    /// ```
    pub fn resolve(&self, token: &str) -> EvalResult<Value> {
        let value = if is_numeral(token) {
            Value::Numeral(Numeral::parse(token)?)
        } else if is_integer_literal(token) {
            let literal = token.parse()
                               .map_err(|_| RuntimeError::LiteralTooLarge { token: token.to_string() })?;
            Value::Integer(literal)
        } else {
            self.variables.get_variable(token)?.value().clone()
        };

        trace!("resolved '{token}' to {value}");
        Ok(value)
    }
}

fn is_integer_literal(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
