use log::debug;

use crate::interpreter::{
    command::Command,
    core::{Context, EvalResult},
    handler::Handler,
    value::Value,
};

/// Binds the value of a token to a variable name.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssignmentHandler;

impl Handler for AssignmentHandler {
    fn handle(&self, command: &Command, context: &mut Context) -> EvalResult<Option<Value>> {
        let [name, token] = command.expect_arguments::<2>()?;

        let value = context.resolve(token)?;
        debug!("set {name} to '{token}'");
        context.variables.set_variable(name, value)?;

        Ok(None)
    }
}
