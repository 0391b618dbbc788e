use crate::interpreter::{
    command::Command,
    core::{Context, EvalResult},
    handler::Handler,
    value::Value,
};

/// Produces the textual form of a resolved token.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisplayHandler;

impl Handler for DisplayHandler {
    fn handle(&self, command: &Command, context: &mut Context) -> EvalResult<Option<Value>> {
        let [token] = command.expect_arguments::<1>()?;
        let value = context.resolve(token)?;
        Ok(Some(Value::Text(value.to_string())))
    }
}
