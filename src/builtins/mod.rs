use crate::environment::Environment;
use crate::interpreter::EvalError;
use crate::value::{self, Type, Value};

mod arithmetic;
mod binding;
mod comparison;
mod control;
pub mod io;
mod list;

/*
Every builtin receives its arguments already reduced and owns them. Argument
indices in error messages start at 0.
*/

pub fn register(env: &Environment) {
    env.add_builtin("+", arithmetic::add);
    env.add_builtin("-", arithmetic::sub);
    env.add_builtin("*", arithmetic::mul);
    env.add_builtin("/", arithmetic::div);
    env.add_builtin("%", arithmetic::rem);
    env.add_builtin("floor", arithmetic::floor);

    env.add_builtin(">", comparison::gt);
    env.add_builtin(">=", comparison::ge);
    env.add_builtin("<", comparison::lt);
    env.add_builtin("<=", comparison::le);
    env.add_builtin("==", comparison::eq);
    env.add_builtin("!=", comparison::ne);
    env.add_builtin("&&", comparison::and);
    env.add_builtin("||", comparison::or);
    env.add_builtin("!", comparison::not);

    env.add_builtin("list", list::list);
    env.add_builtin("head", list::head);
    env.add_builtin("tail", list::tail);
    env.add_builtin("join", list::join);
    env.add_builtin("eval", list::eval);
    env.add_builtin("cons", list::cons);
    env.add_builtin("len", list::len);
    env.add_builtin("init", list::init);

    env.add_builtin("def", binding::def);
    env.add_builtin("=", binding::put);
    env.add_builtin("\\", binding::lambda);
    env.add_builtin("fun", binding::fun);

    env.add_builtin("cond", control::cond);
    env.add_builtin("exit", control::exit);

    env.add_builtin("load", io::load);
    env.add_builtin("print", io::print);
    env.add_builtin("error", io::error);
}

pub(crate) fn check_count(func: &str, args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() != expected {
        return Err(EvalError::ArgumentCount {
            func: func.to_string(),
            got: args.len(),
            expected,
        });
    }
    Ok(())
}

fn type_error(func: &str, index: usize, got: &Value, expected: Type) -> EvalError {
    EvalError::ArgumentType {
        func: func.to_string(),
        index,
        got: value::type_of(got),
        expected,
    }
}

pub(crate) fn take_number(func: &str, index: usize, arg: Value) -> Result<f64, EvalError> {
    match arg {
        Value::Number(n) => Ok(n),
        other => Err(type_error(func, index, &other, Type::Number)),
    }
}

pub(crate) fn take_boolean(func: &str, index: usize, arg: Value) -> Result<bool, EvalError> {
    match arg {
        Value::Boolean(b) => Ok(b),
        other => Err(type_error(func, index, &other, Type::Boolean)),
    }
}

pub(crate) fn take_string(func: &str, index: usize, arg: Value) -> Result<String, EvalError> {
    match arg {
        Value::String(s) => Ok(s),
        other => Err(type_error(func, index, &other, Type::String)),
    }
}

pub(crate) fn take_qexpr(func: &str, index: usize, arg: Value) -> Result<Vec<Value>, EvalError> {
    match arg {
        Value::QExpr(cells) => Ok(cells),
        other => Err(type_error(func, index, &other, Type::QExpr)),
    }
}

pub(crate) fn take_symbols(func: &str, cells: Vec<Value>) -> Result<Vec<String>, EvalError> {
    cells
        .into_iter()
        .map(|cell| match cell {
            Value::Symbol(name) => Ok(name),
            other => Err(EvalError::NonSymbol {
                func: func.to_string(),
                got: value::type_of(&other),
            }),
        })
        .collect()
}

/// Checks the arity and hands back the only argument.
pub(crate) fn single(func: &str, args: Vec<Value>) -> Result<Value, EvalError> {
    check_count(func, &args, 1)?;
    args.into_iter().next().ok_or_else(|| EvalError::NoArguments {
        func: func.to_string(),
    })
}

/// Checks the arity and hands back both arguments.
pub(crate) fn pair(func: &str, args: Vec<Value>) -> Result<(Value, Value), EvalError> {
    check_count(func, &args, 2)?;
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ => Err(EvalError::NoArguments {
            func: func.to_string(),
        }),
    }
}
