use crate::interpreter::{
    command::{Category, Command},
    core::{Context, EvalResult},
    value::Value,
};

/// Handles `set NAME VALUE`.
pub mod assignment;
/// Handles `add`, `subtract`, `multiply` and `divide`.
pub mod arithmetic;
/// Handles `convert VALUE`.
pub mod conversion;
/// Handles `display VALUE`.
pub mod display;

pub use self::{
    arithmetic::ArithmeticHandler, assignment::AssignmentHandler, conversion::ConversionHandler,
    display::DisplayHandler,
};

/// Executes commands of one category.
pub trait Handler {
    /// Executes `command` against `context`.
    ///
    /// # Returns
    /// `Some(Value)` for commands that produce a result, `None` for commands
    /// that only change the context.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`](crate::error::RuntimeError) if the command
    /// has the wrong arguments or its operation fails.
    fn handle(&self, command: &Command, context: &mut Context) -> EvalResult<Option<Value>>;
}

/// One handler per statement category, fixed at construction.
#[derive(Debug, Default)]
pub struct Handlers {
    assignment: AssignmentHandler,
    arithmetic: ArithmeticHandler,
    conversion: ConversionHandler,
    display:    DisplayHandler,
}

impl Handlers {
    /// Creates the handler set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handler registered for `category`.
    #[must_use]
    pub fn get(&self, category: Category) -> &dyn Handler {
        match category {
            Category::Assignment => &self.assignment,
            Category::Arithmetic => &self.arithmetic,
            Category::Conversion => &self.conversion,
            Category::Display => &self.display,
        }
    }
}
