use crate::environment::Environment;
use crate::interpreter::{self, EvalError};
use crate::value::Value;
use itertools::Itertools;
use std::fs;
use std::ops::ControlFlow;
use super::{single, take_string};

pub fn print(env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    env.emit(&args.iter().map(Value::to_plain_string).join(" "));
    Ok(Value::sexpr())
}

pub fn error(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    let msg = take_string("error", 0, single("error", args)?)?;
    Err(EvalError::User(msg))
}

pub fn load(env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    let path = take_string("load", 0, single("load", args)?)?;
    load_file(env, &path)
}

/// Reads and reduces every top-level form of the file at `path`.
///
/// An Error produced by one form is reported through the environment's
/// output and the next form still runs. An exit request stops the load and
/// is handed back to the caller.
pub fn load_file(env: &Environment, path: &str) -> Result<Value, EvalError> {
    let source = fs::read_to_string(path).map_err(|err| EvalError::Load {
        path: path.to_string(),
        reason: err.to_string(),
    })?;
    tracing::info!(path, bytes = source.len(), "loading file");

    let stopped = interpreter::eval_forms(env, path, &source, |value| match value {
        Value::ExitRequest(_) => {
            tracing::debug!(path, "exit requested while loading");
            ControlFlow::Break(value)
        }
        Value::Error(_) => {
            tracing::debug!(path, error = %value, "form failed");
            env.emit(&value.to_string());
            ControlFlow::Continue(())
        }
        _ => ControlFlow::Continue(()),
    })
    .map_err(|err| EvalError::Load {
        path: path.to_string(),
        reason: err.to_string(),
    })?;
    Ok(stopped.unwrap_or_else(Value::sexpr))
}
