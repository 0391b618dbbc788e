use crate::{
    error::NumeralError,
    interpreter::{
        command::Command,
        core::{Context, EvalResult},
        handler::Handler,
        value::Value,
    },
    numeral::Numeral,
};

/// Converts a numeral to its decimal and an integer to its numeral.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConversionHandler;

impl Handler for ConversionHandler {
    fn handle(&self, command: &Command, context: &mut Context) -> EvalResult<Option<Value>> {
        let [token] = command.expect_arguments::<1>()?;

        let converted = match context.resolve(token)? {
            Value::Numeral(n) => Value::Integer(n.into()),
            Value::Integer(i) => Value::Numeral(Numeral::from_decimal(i)?),
            other => {
                return Err(NumeralError::TypeMismatch { details: format!("cannot convert a {} value",
                                                                         other.kind()) }.into());
            },
        };

        Ok(Some(converted))
    }
}
