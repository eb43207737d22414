pub mod function;
pub mod read;

pub use function::{Builtin, BuiltinFn, Function, Lambda};

use crate::interpreter::EvalError;
use crate::reader::escape;
use itertools::Itertools;
use std::fmt::{self, Display};

/// The single runtime type of the language.
///
/// Children of `SExpr` and `QExpr` are owned by their parent; `Clone` is a
/// deep copy and dropping a value releases the whole subtree.
#[derive(Clone, Debug)]
pub enum Value {
    Number(f64),
    Boolean(bool),
    String(String),
    Symbol(String),
    Error(String),
    ExitRequest(String),
    Function(Function),
    SExpr(Vec<Value>),
    QExpr(Vec<Value>),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Type {
    Number,
    Boolean,
    String,
    Symbol,
    Error,
    ExitRequest,
    Function,
    SExpr,
    QExpr,
}

impl Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Type::Number => "Number",
            Type::Boolean => "Boolean",
            Type::String => "String",
            Type::Symbol => "Symbol",
            Type::Error => "Error",
            Type::ExitRequest => "Exit request",
            Type::Function => "Function",
            Type::SExpr => "S-Expression",
            Type::QExpr => "Q-Expression",
        })
    }
}

pub fn type_of(value: &Value) -> Type {
    match value {
        Value::Number(_) => Type::Number,
        Value::Boolean(_) => Type::Boolean,
        Value::String(_) => Type::String,
        Value::Symbol(_) => Type::Symbol,
        Value::Error(_) => Type::Error,
        Value::ExitRequest(_) => Type::ExitRequest,
        Value::Function(_) => Type::Function,
        Value::SExpr(_) => Type::SExpr,
        Value::QExpr(_) => Type::QExpr,
    }
}

impl Value {
    pub fn number(x: f64) -> Value {
        Value::Number(x)
    }

    pub fn boolean(b: bool) -> Value {
        Value::Boolean(b)
    }

    pub fn string(s: impl Into<String>) -> Value {
        Value::String(s.into())
    }

    pub fn symbol(s: impl Into<String>) -> Value {
        Value::Symbol(s.into())
    }

    pub fn error(msg: impl Into<String>) -> Value {
        Value::Error(msg.into())
    }

    pub fn exit_request(msg: impl Into<String>) -> Value {
        Value::ExitRequest(msg.into())
    }

    pub fn builtin(name: &str, func: BuiltinFn) -> Value {
        Value::Function(Function::Builtin(Builtin {
            name: name.to_string(),
            func,
        }))
    }

    pub fn lambda(formals: Vec<String>, body: Value) -> Value {
        Value::Function(Function::Lambda(Lambda::new(formals, body)))
    }

    pub fn sexpr() -> Value {
        Value::SExpr(Vec::new())
    }

    pub fn qexpr() -> Value {
        Value::QExpr(Vec::new())
    }

    pub fn type_name(&self) -> String {
        type_of(self).to_string()
    }

    /// Error and ExitRequest values end the reduction they appear in.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Value::Error(_) | Value::ExitRequest(_))
    }

    pub fn is_exit_request(&self) -> bool {
        matches!(self, Value::ExitRequest(_))
    }

    /// Text used by `print`: strings are written raw, everything else in
    /// its display form.
    pub fn to_plain_string(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            // NaN equals NaN so that a copy always equals its original
            (Value::Number(x), Value::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
            (Value::Boolean(x), Value::Boolean(y)) => x == y,
            (Value::String(x), Value::String(y)) => x == y,
            (Value::Symbol(x), Value::Symbol(y)) => x == y,
            (Value::Error(x), Value::Error(y)) => x == y,
            // there is only one kind of exit request
            (Value::ExitRequest(_), Value::ExitRequest(_)) => true,
            (Value::Function(x), Value::Function(y)) => x == y,
            (Value::SExpr(xs), Value::SExpr(ys)) | (Value::QExpr(xs), Value::QExpr(ys)) => {
                xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| x == y)
            }
            _ => false,
        }
    }
}

impl From<EvalError> for Value {
    fn from(err: EvalError) -> Value {
        Value::Error(err.to_string())
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "\"{}\"", escape::escape(s)),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::Error(msg) => write!(f, "Error: {}", msg),
            Value::ExitRequest(msg) => write!(f, "Exit request: {}", msg),
            Value::Function(func) => write!(f, "{}", func),
            Value::SExpr(cells) => write!(f, "({})", cells.iter().join(" ")),
            Value::QExpr(cells) => write!(f, "{{{}}}", cells.iter().join(" ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;

    fn nums(xs: &[f64]) -> Vec<Value> {
        xs.iter().map(|x| Value::number(*x)).collect()
    }

    fn noop(_env: &Environment, _args: Vec<Value>) -> Result<Value, EvalError> {
        Ok(Value::sexpr())
    }

    fn other_noop(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
        Ok(Value::QExpr(args))
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::number(1.0).type_name(), "Number");
        assert_eq!(Value::qexpr().type_name(), "Q-Expression");
        assert_eq!(Value::sexpr().type_name(), "S-Expression");
        assert_eq!(Value::exit_request("bye").type_name(), "Exit request");
        assert_eq!(Value::builtin("noop", noop).type_name(), "Function");
    }

    #[test]
    fn test_tags_must_match() {
        assert_ne!(Value::string("a"), Value::symbol("a"));
        assert_ne!(Value::QExpr(nums(&[1.0])), Value::SExpr(nums(&[1.0])));
        assert_ne!(Value::error("a"), Value::string("a"));
    }

    #[test]
    fn test_list_equality_is_ordered() {
        assert_eq!(Value::QExpr(nums(&[1.0, 2.0, 3.0])), Value::QExpr(nums(&[1.0, 2.0, 3.0])));
        assert_ne!(Value::QExpr(nums(&[1.0, 2.0])), Value::QExpr(nums(&[1.0, 2.0, 3.0])));
        assert_ne!(Value::QExpr(nums(&[2.0, 1.0])), Value::QExpr(nums(&[1.0, 2.0])));
    }

    #[test]
    fn test_nan_equals_its_copy() {
        let nan = Value::number(f64::NAN);
        assert_eq!(nan.clone(), nan);
        assert_ne!(nan, Value::number(0.0));
    }

    #[test]
    fn test_exit_requests_are_equal() {
        assert_eq!(Value::exit_request("a"), Value::exit_request("b"));
    }

    #[test]
    fn test_builtins_compare_by_operation() {
        assert_eq!(Value::builtin("a", noop), Value::builtin("b", noop));
        assert_ne!(Value::builtin("a", noop), Value::builtin("a", other_noop));
    }

    #[test]
    fn test_lambda_equality_ignores_environment() {
        let body = Value::QExpr(vec![Value::symbol("+"), Value::symbol("x"), Value::symbol("y")]);
        let f = Value::lambda(vec!["x".into(), "y".into()], body.clone());
        let g = Value::lambda(vec!["x".into(), "y".into()], body);
        if let Value::Function(Function::Lambda(lambda)) = &g {
            lambda.env.put("x", &Value::number(1.0));
        }
        assert_eq!(f, g);
    }

    #[test]
    fn test_copy_preserves_equality() {
        let values = vec![
            Value::number(2.5),
            Value::boolean(true),
            Value::string("hi\n"),
            Value::symbol("x"),
            Value::error("boom"),
            Value::exit_request("bye"),
            Value::builtin("noop", noop),
            Value::lambda(vec!["x".into()], Value::QExpr(vec![Value::symbol("x")])),
            Value::SExpr(vec![Value::symbol("+"), Value::QExpr(nums(&[1.0, 2.0]))]),
            Value::qexpr(),
        ];
        for v in values {
            assert_eq!(v.clone(), v);
        }
    }

    #[test]
    fn test_copy_does_not_share_closure_environment() {
        let original = Value::lambda(vec!["y".into()], Value::QExpr(vec![Value::symbol("y")]));
        if let Value::Function(Function::Lambda(lambda)) = &original {
            lambda.env.put("x", &Value::number(1.0));
        }
        let copy = original.clone();
        if let Value::Function(Function::Lambda(lambda)) = &copy {
            lambda.env.put("x", &Value::number(2.0));
        }
        match &original {
            Value::Function(Function::Lambda(lambda)) => {
                assert_eq!(lambda.env.get("x"), Value::number(1.0))
            }
            other => panic!("expected a lambda, got {}", other),
        }
    }

    #[test]
    fn test_display() {
        let expr = Value::SExpr(vec![
            Value::symbol("+"),
            Value::number(1.0),
            Value::QExpr(vec![Value::number(0.5), Value::string("a\"b")]),
        ]);
        assert_eq!(expr.to_string(), "(+ 1 {0.5 \"a\\\"b\"})");
        assert_eq!(Value::boolean(false).to_string(), "false");
        assert_eq!(Value::error("oops").to_string(), "Error: oops");
        assert_eq!(Value::builtin("head", noop).to_string(), "<builtin: head>");
        let f = Value::lambda(
            vec!["x".into(), "y".into()],
            Value::QExpr(vec![Value::symbol("+"), Value::symbol("x"), Value::symbol("y")]),
        );
        assert_eq!(f.to_string(), "(\\ {x y} {+ x y})");
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(Value::string("a\tb").to_plain_string(), "a\tb");
        assert_eq!(Value::number(3.0).to_plain_string(), "3");
    }
}
