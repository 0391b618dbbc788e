use std::collections::BTreeMap;

use log::debug;

use crate::{
    error::{NumeralError, RuntimeError},
    interpreter::{
        core::EvalResult,
        value::{Value, ValueKind},
    },
    numeral::grammar::is_numeral,
};

/// A named binding of a numeral or an integer.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name:  String,
    value: Value,
    kind:  ValueKind,
}

impl Variable {
    /// Creates a variable.
    ///
    /// # Errors
    /// - [`RuntimeError::InvalidVariableName`] if `name` is itself a valid
    ///   numeral, which would make the name ambiguous with a literal.
    /// - A type mismatch if `value` is neither a numeral nor an integer.
    pub fn new(name: &str, value: Value) -> EvalResult<Self> {
        if !Self::is_valid_name(name) {
            return Err(RuntimeError::InvalidVariableName { name: name.to_string() });
        }

        let kind = value.kind();
        if !matches!(kind, ValueKind::Numeral | ValueKind::Integer) {
            return Err(NumeralError::TypeMismatch { details: format!("cannot store a {kind} value in '{name}'") }.into());
        }

        Ok(Self { name: name.to_string(),
                  value,
                  kind })
    }

    /// Returns `true` if `name` may be used as a variable name.
    #[must_use]
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty() && !is_numeral(name)
    }

    /// The name of the variable.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stored value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// The kind of the stored value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// Stores the variables of one interpreter session.
///
/// Lookup is by exact name. Bindings are created or overwritten by
/// assignment and live as long as the store; there is no deletion.
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    variables: BTreeMap<String, Variable>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `value` to `name`, replacing any previous binding.
    ///
    /// # Errors
    /// See [`Variable::new`].
    pub fn set_variable(&mut self, name: &str, value: Value) -> EvalResult<()> {
        let variable = Variable::new(name, value)?;
        debug!("binding {variable} ({})", variable.kind());
        self.variables.insert(name.to_string(), variable);
        Ok(())
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// Looks up a variable by name, failing if it is unknown.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnresolvedToken`] if there is no such
    /// variable.
    pub fn get_variable(&self, name: &str) -> EvalResult<&Variable> {
        self.get(name)
            .ok_or_else(|| RuntimeError::UnresolvedToken { token: name.to_string() })
    }

    /// Returns `true` if a variable named `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Iterates over the variable names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl std::fmt::Display for VariableStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, variable) in self.variables.values().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{variable}")?;
        }
        Ok(())
    }
}
