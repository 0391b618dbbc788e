use crate::{
    error::RuntimeError,
    interpreter::{
        command::Command,
        core::{Context, EvalResult},
        handler::Handler,
        value::Value,
    },
    numeral::apply,
};

/// Applies the operator of an arithmetic keyword to two resolved tokens.
///
/// Failures of the operation itself are tagged with the keyword; failures to
/// resolve a token are reported as they are.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArithmeticHandler;

impl Handler for ArithmeticHandler {
    fn handle(&self, command: &Command, context: &mut Context) -> EvalResult<Option<Value>> {
        let keyword = command.keyword();
        let op = keyword.operator().ok_or_else(|| {
                                        RuntimeError::MalformedCommand { details: format!("'{keyword}' is not an arithmetic operation") }
                                    })?;
        let [left, right] = command.expect_arguments::<2>()?;

        let left = context.resolve(left)?;
        let right = context.resolve(right)?;

        apply(op, &left, &right).map(Some)
                                .map_err(|source| RuntimeError::Operation { op: keyword,
                                                                            source })
    }
}
