use crate::environment::Environment;
use crate::interpreter::{self, EvalError};
use crate::value::{self, Type, Value};
use super::{pair, single, take_qexpr};

pub fn list(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    Ok(Value::QExpr(args))
}

/// `{first}`, or `{}` for an empty list.
pub fn head(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    let mut cells = take_qexpr("head", 0, single("head", args)?)?;
    cells.truncate(1);
    Ok(Value::QExpr(cells))
}

pub fn tail(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    let cells = take_qexpr("tail", 0, single("tail", args)?)?;
    Ok(Value::QExpr(cells.into_iter().skip(1).collect()))
}

pub fn init(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    let mut cells = take_qexpr("init", 0, single("init", args)?)?;
    cells.pop();
    Ok(Value::QExpr(cells))
}

pub fn join(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    if args.is_empty() {
        return Err(EvalError::NoArguments {
            func: "join".to_string(),
        });
    }
    let mut joined = Vec::new();
    for (i, arg) in args.into_iter().enumerate() {
        joined.extend(take_qexpr("join", i, arg)?);
    }
    Ok(Value::QExpr(joined))
}

pub fn eval(env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    let cells = take_qexpr("eval", 0, single("eval", args)?)?;
    Ok(interpreter::eval(env, Value::SExpr(cells)))
}

pub fn cons(env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    let (first, rest) = pair("cons", args)?;
    let first = interpreter::eval(env, first);
    if !matches!(first, Value::Number(_)) {
        return Err(EvalError::ArgumentType {
            func: "cons".to_string(),
            index: 0,
            got: value::type_of(&first),
            expected: Type::Number,
        });
    }
    let rest = take_qexpr("cons", 1, rest)?;
    let mut cells = Vec::with_capacity(rest.len() + 1);
    cells.push(first);
    cells.extend(rest);
    Ok(Value::QExpr(cells))
}

/// The length comes back wrapped in a list: `(len {a b})` is `{2}`.
pub fn len(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    let cells = take_qexpr("len", 0, single("len", args)?)?;
    Ok(Value::QExpr(vec![Value::number(cells.len() as f64)]))
}
