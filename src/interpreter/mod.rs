use crate::environment::Environment;
use crate::reader::{self, ParseError};
use crate::value::{self, read, Function, Lambda, Value};
use std::collections::VecDeque;
use std::ops::ControlFlow;

mod error;

pub use error::EvalError;

/// Formal parameter that collects the remaining arguments into a list.
pub const VARIADIC: &str = "&";

/// Reduces `value` under `env`. Only symbols and S-Expressions reduce;
/// every other value is already in normal form.
pub fn eval(env: &Environment, value: Value) -> Value {
    match value {
        Value::Symbol(name) => env.get(&name),
        Value::SExpr(cells) => eval_sexpr(env, cells),
        other => other,
    }
}

fn eval_sexpr(env: &Environment, cells: Vec<Value>) -> Value {
    let mut evaluated = Vec::with_capacity(cells.len());
    for cell in cells {
        let value = eval(env, cell);
        if value.is_terminal() {
            return value;
        }
        evaluated.push(value);
    }

    let mut cells = evaluated.into_iter();
    match (cells.next(), cells.len()) {
        (None, _) => Value::sexpr(),
        (Some(only), 0) => only,
        (Some(Value::Function(func)), _) => call(env, func, cells.collect()),
        (Some(other), _) => EvalError::NotAFunction(value::type_of(&other)).into(),
    }
}

/// Applies `func` to `args`, with `env` as the calling environment.
pub fn call(env: &Environment, func: Function, args: Vec<Value>) -> Value {
    match func {
        Function::Builtin(builtin) => builtin.call(env, args),
        Function::Lambda(lambda) => call_lambda(env, lambda, args),
    }
}

fn call_lambda(env: &Environment, lambda: Lambda, args: Vec<Value>) -> Value {
    let Lambda {
        formals,
        body,
        env: scope,
    } = lambda;
    let given = args.len();
    let total = formals.len();
    let mut formals = VecDeque::from(formals);
    let mut args = args.into_iter();

    while args.len() > 0 {
        let formal = match formals.pop_front() {
            Some(formal) => formal,
            None => {
                return EvalError::TooManyArguments {
                    given,
                    expected: total,
                }
                .into()
            }
        };

        if formal == VARIADIC {
            if formals.len() != 1 {
                return EvalError::VariadicFormat.into();
            }
            if let Some(rest) = formals.pop_front() {
                scope.bind(&rest, Value::QExpr(args.by_ref().collect()));
            }
            break;
        }

        if let Some(arg) = args.next() {
            scope.bind(&formal, arg);
        }
    }

    // no arguments left for the variadic formal
    if formals.front().map(String::as_str) == Some(VARIADIC) {
        if formals.len() != 2 {
            return EvalError::VariadicFormat.into();
        }
        formals.pop_front();
        if let Some(rest) = formals.pop_front() {
            scope.bind(&rest, Value::qexpr());
        }
    }

    if formals.is_empty() {
        tracing::debug!(given, total, "applying saturated closure");
        scope.set_parent(Some(env.clone()));
        eval(&scope, into_sexpr(*body))
    } else {
        tracing::debug!(given, remaining = formals.len(), "partially applied closure");
        Value::Function(Function::Lambda(Lambda {
            formals: formals.into(),
            body,
            env: scope,
        }))
    }
}

/// Reinterprets a quoted list as an expression to reduce.
pub fn into_sexpr(value: Value) -> Value {
    match value {
        Value::QExpr(cells) => Value::SExpr(cells),
        other => Value::SExpr(vec![other]),
    }
}

/// Parses `source` as one input line and reduces the whole line as a single
/// S-Expression, the way the interactive prompt does.
pub fn eval_line(env: &Environment, origin: &str, source: &str) -> Result<Value, ParseError> {
    let tree = reader::parse(origin, source)?;
    Ok(eval(env, read::read(&tree)))
}

/// Parses `source` and reduces each top-level form on its own, in order,
/// handing every result to `visit`. A `Break` from `visit` ends the run and
/// its value comes back as `Some`.
pub fn eval_forms<F>(
    env: &Environment,
    origin: &str,
    source: &str,
    mut visit: F,
) -> Result<Option<Value>, ParseError>
where
    F: FnMut(Value) -> ControlFlow<Value>,
{
    let tree = reader::parse(origin, source)?;
    for form in read::read_forms(&tree) {
        if let ControlFlow::Break(value) = visit(eval(env, form)) {
            return Ok(Some(value));
        }
    }
    Ok(None)
}
