use log::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        command::Command,
        handler::Handlers,
        lexer::split_statements,
        resolver::TokenResolver,
        value::Value,
        variable::VariableStore,
    },
};

/// Result type used by the interpreter.
///
/// All statement level functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime state shared by all handlers.
///
/// The context is created once per interpreter session. Its variable store
/// is the only state that survives from one statement to the next.
#[derive(Debug, Default)]
pub struct Context {
    /// The variables bound by `set`.
    pub variables: VariableStore,
}

impl Context {
    /// Creates a context with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a token resolver over the current variables.
    #[must_use]
    pub const fn resolver(&self) -> TokenResolver<'_> {
        TokenResolver::new(&self.variables)
    }

    /// Resolves a token against the current variables.
    ///
    /// # Errors
    /// See [`TokenResolver::resolve`].
    pub fn resolve(&self, token: &str) -> EvalResult<Value> {
        self.resolver().resolve(token)
    }
}

/// A statement that failed, together with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementFailure {
    /// The statement as written.
    pub statement: String,
    /// Why it failed.
    pub error:     RuntimeError,
}

impl std::fmt::Display for StatementFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in command '{}': {}", self.statement, self.error)
    }
}

/// The outcome of executing a line.
///
/// Results are collected in statement order. A failing statement does not
/// stop the statements after it; it is recorded in `failures` instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Execution {
    /// The values produced by statements that yield one.
    pub results:  Vec<Value>,
    /// The statements that failed.
    pub failures: Vec<StatementFailure>,
}

impl Execution {
    /// Returns `true` if no statement failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Appends the outcome of a later execution.
    pub fn extend(&mut self, other: Self) {
        self.results.extend(other.results);
        self.failures.extend(other.failures);
    }
}

/// Executes lines of the command language.
///
/// An interpreter owns one [`Context`] and one handler per statement
/// category; variables persist across calls to [`Interpreter::execute`].
///
/// # Example
/// ```
/// use numera::{
///     interpreter::{core::Interpreter, value::Value},
///     numeral::Numeral,
/// };
///
/// let mut interpreter = Interpreter::new();
/// let execution = interpreter.execute("set a X; set b V; add a b; display a");
///
/// assert!(execution.is_success());
/// assert_eq!(execution.results,
///            vec![Value::Numeral(Numeral::from_decimal(15).unwrap()),
///                 Value::Text("X".to_string())]);
/// ```
#[derive(Debug, Default)]
pub struct Interpreter {
    context:  Context,
    handlers: Handlers,
}

impl Interpreter {
    /// Creates an interpreter with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes every statement on `line`.
    ///
    /// The line is split on the statement separator and each statement is
    /// parsed and dispatched on its own, so a failure is reported and the
    /// remaining statements still run.
    pub fn execute(&mut self, line: &str) -> Execution {
        let mut execution = Execution::default();

        for statement in split_statements(line) {
            match self.execute_statement(statement) {
                Ok(Some(value)) => execution.results.push(value),
                Ok(None) => {},
                Err(error) => {
                    let failure = StatementFailure { statement: statement.to_string(),
                                                     error };
                    debug!("{failure}");
                    execution.failures.push(failure);
                },
            }
        }

        execution
    }

    /// Parses and executes a single statement.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] if the statement is malformed or its
    /// operation fails.
    pub fn execute_statement(&mut self, statement: &str) -> EvalResult<Option<Value>> {
        let command = Command::parse(statement)?;
        debug!("dispatching '{statement}' as {:?}", command.category());
        self.handlers.get(command.category()).handle(&command, &mut self.context)
    }

    /// The variables bound so far.
    #[must_use]
    pub const fn variables(&self) -> &VariableStore {
        &self.context.variables
    }
}
