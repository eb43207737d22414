use crate::environment::Environment;
use crate::interpreter::{self, EvalError};
use crate::value::Value;
use super::{check_count, take_boolean, take_qexpr};

/// `(cond test {then} {else})`. Only the chosen branch is reduced.
pub fn cond(env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    check_count("cond", &args, 3)?;
    let mut args = args.into_iter();
    let (test, then, otherwise) = match (args.next(), args.next(), args.next()) {
        (Some(test), Some(then), Some(otherwise)) => (test, then, otherwise),
        _ => {
            return Err(EvalError::NoArguments {
                func: "cond".to_string(),
            })
        }
    };
    let test = take_boolean("cond", 0, test)?;
    let then = take_qexpr("cond", 1, then)?;
    let otherwise = take_qexpr("cond", 2, otherwise)?;

    let branch = if test { then } else { otherwise };
    Ok(interpreter::eval(env, Value::SExpr(branch)))
}

pub fn exit(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    tracing::debug!(discarded = args.len(), "exit requested");
    Ok(Value::exit_request("exit requested"))
}
