use crate::environment::Environment;
use crate::interpreter::EvalError;
use crate::value::Value;
use super::{pair, single, take_boolean, take_number};

fn compare(func: &str, args: Vec<Value>, op: fn(f64, f64) -> bool) -> Result<Value, EvalError> {
    let (x, y) = pair(func, args)?;
    let x = take_number(func, 0, x)?;
    let y = take_number(func, 1, y)?;
    Ok(Value::boolean(op(x, y)))
}

pub fn gt(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    compare(">", args, |x, y| x > y)
}

pub fn ge(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    compare(">=", args, |x, y| x >= y)
}

pub fn lt(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    compare("<", args, |x, y| x < y)
}

pub fn le(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    compare("<=", args, |x, y| x <= y)
}

pub fn eq(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    let (x, y) = pair("==", args)?;
    Ok(Value::boolean(x == y))
}

pub fn ne(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    let (x, y) = pair("!=", args)?;
    Ok(Value::boolean(x != y))
}

fn logic(func: &str, args: Vec<Value>, op: fn(bool, bool) -> bool) -> Result<Value, EvalError> {
    let operands = args
        .into_iter()
        .enumerate()
        .map(|(i, arg)| take_boolean(func, i, arg))
        .collect::<Result<Vec<bool>, EvalError>>()?;
    operands
        .into_iter()
        .reduce(op)
        .map(Value::boolean)
        .ok_or_else(|| EvalError::NoArguments {
            func: func.to_string(),
        })
}

pub fn and(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    logic("&&", args, |x, y| x && y)
}

pub fn or(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    logic("||", args, |x, y| x || y)
}

pub fn not(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    let b = take_boolean("!", 0, single("!", args)?)?;
    Ok(Value::boolean(!b))
}

#[cfg(test)]
mod tests {
    use crate::builtins::testing::*;
    use crate::value::Value;

    #[test]
    fn test_ordering() {
        check_value("(> 2 1)", Value::boolean(true));
        check_value("(>= 1 1)", Value::boolean(true));
        check_value("(< 2 1)", Value::boolean(false));
        check_value("(<= 1 2)", Value::boolean(true));
    }

    #[test]
    fn test_ordering_needs_two_numbers() {
        check_error("(> 1 2 3)", &|err: &str| {
            assert_eq!(
                err,
                "Function '>' passed incorrect number of arguments. Got 3, Expected 2."
            )
        });
        check_error("(< 1 {2})", &|err: &str| {
            assert!(err.contains("Function '<' passed incorrect type for argument 1"))
        });
    }

    #[test]
    fn test_structural_equality() {
        check_value("(== {1 2 3} {1 2 3})", Value::boolean(true));
        check_value("(== {1 2} {1 2 3})", Value::boolean(false));
        check_value("(!= {1 2} {1 2 3})", Value::boolean(true));
        check_value("(== \"a\" \"a\")", Value::boolean(true));
        check_value("(== 1 \"1\")", Value::boolean(false));
        check_value("(== + +)", Value::boolean(true));
        check_value("(== + -)", Value::boolean(false));
        check_value("(== (\\ {x} {x}) (\\ {x} {x}))", Value::boolean(true));
        check_value("(== (\\ {x} {x}) (\\ {y} {y}))", Value::boolean(false));
    }

    #[test]
    fn test_nan_is_equal_to_itself() {
        check_value(
            "(def {n} (- (* 1e308 10) (* 1e308 10)))\n(== n n)",
            Value::boolean(true),
        );
        check_value(
            "(def {n} (- (* 1e308 10) (* 1e308 10)))\n(!= n 1)",
            Value::boolean(true),
        );
    }

    #[test]
    fn test_logic() {
        check_value("(&& (== 1 1) (< 1 2))", Value::boolean(true));
        check_value("(&& (== 1 1) (> 1 2))", Value::boolean(false));
        check_value("(|| (== 1 2) (< 1 2) (> 1 2))", Value::boolean(true));
        check_value("(! (== 1 2))", Value::boolean(true));
    }

    #[test]
    fn test_logic_needs_booleans() {
        check_error("(&& (== 1 1) 1)", &|err: &str| {
            assert!(err.contains("Got Number, Expected Boolean"))
        });
        check_error("(! (== 1 1) (== 1 1))", &|err: &str| {
            assert!(err.contains("Function '!' passed incorrect number of arguments"))
        });
    }
}
