use crate::environment::Environment;
use crate::interpreter::EvalError;
use crate::value::Value;
use super::{single, take_number};

#[derive(Debug, Clone, Copy)]
enum Binop {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl Binop {
    fn name(self) -> &'static str {
        match self {
            Binop::Add => "+",
            Binop::Sub => "-",
            Binop::Mul => "*",
            Binop::Div => "/",
            Binop::Rem => "%",
        }
    }

    fn apply(self, x: f64, y: f64) -> Result<f64, EvalError> {
        match self {
            Binop::Add => Ok(x + y),
            Binop::Sub => Ok(x - y),
            Binop::Mul => Ok(x * y),
            Binop::Div if y == 0.0 => Err(EvalError::DivisionByZero),
            Binop::Div => Ok(x / y),
            // remainder works on the operands rounded to whole numbers
            Binop::Rem if y.round() == 0.0 => Err(EvalError::DivisionByZero),
            Binop::Rem => Ok(x.round() % y.round()),
        }
    }
}

fn fold(op: Binop, args: Vec<Value>) -> Result<Value, EvalError> {
    let operands = args
        .into_iter()
        .enumerate()
        .map(|(i, arg)| take_number(op.name(), i, arg))
        .collect::<Result<Vec<f64>, EvalError>>()?;

    let (first, rest) = match operands.split_first() {
        Some(split) => split,
        None => return Err(EvalError::NoArguments { func: op.name().to_string() }),
    };
    if let (Binop::Sub, true) = (op, rest.is_empty()) {
        return Ok(Value::number(-first));
    }
    rest.iter()
        .try_fold(*first, |acc, y| op.apply(acc, *y))
        .map(Value::number)
}

pub fn add(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    fold(Binop::Add, args)
}

pub fn sub(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    fold(Binop::Sub, args)
}

pub fn mul(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    fold(Binop::Mul, args)
}

pub fn div(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    fold(Binop::Div, args)
}

pub fn rem(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    fold(Binop::Rem, args)
}

pub fn floor(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    let x = take_number("floor", 0, single("floor", args)?)?;
    Ok(Value::number(x.floor()))
}
