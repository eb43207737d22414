use crate::value::Type;
use std::fmt;

/// Everything that can go wrong while reducing an expression. These never
/// escape the evaluator as Rust errors: they are turned into `Value::Error`
/// at the point where a builtin or closure returns.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    ArgumentCount {
        func: String,
        got: usize,
        expected: usize,
    },
    NoArguments {
        func: String,
    },
    ArgumentType {
        func: String,
        index: usize,
        got: Type,
        expected: Type,
    },
    EmptyList {
        func: String,
        index: usize,
    },
    DivisionByZero,
    UnboundSymbol(String),
    NotAFunction(Type),
    NonSymbol {
        func: String,
        got: Type,
    },
    SymbolValueMismatch {
        func: String,
        symbols: usize,
        values: usize,
    },
    BuiltinRedefinition {
        func: String,
        name: String,
    },
    VariadicFormat,
    TooManyArguments {
        given: usize,
        expected: usize,
    },
    Load {
        path: String,
        reason: String,
    },
    User(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::ArgumentCount { func, got, expected } => write!(
                f,
                "Function '{}' passed incorrect number of arguments. Got {}, Expected {}.",
                func, got, expected
            ),
            EvalError::NoArguments { func } => {
                write!(f, "Function '{}' passed no arguments.", func)
            }
            EvalError::ArgumentType {
                func,
                index,
                got,
                expected,
            } => write!(
                f,
                "Function '{}' passed incorrect type for argument {}. Got {}, Expected {}.",
                func, index, got, expected
            ),
            EvalError::EmptyList { func, index } => write!(
                f,
                "Function '{}' passed an empty list for argument {}.",
                func, index
            ),
            EvalError::DivisionByZero => write!(f, "Division by zero"),
            EvalError::UnboundSymbol(name) => write!(f, "Unbound symbol '{}'", name),
            EvalError::NotAFunction(got) => write!(
                f,
                "S-Expression does not start with a function. Got {}.",
                got
            ),
            EvalError::NonSymbol { func, got } => write!(
                f,
                "Function '{}' cannot define non-symbol. Got {}.",
                func, got
            ),
            EvalError::SymbolValueMismatch {
                func,
                symbols,
                values,
            } => write!(
                f,
                "Function '{}' passed incorrect number of values to symbols. Got {} symbols and {} values.",
                func, symbols, values
            ),
            EvalError::BuiltinRedefinition { func, name } => write!(
                f,
                "Function '{}' cannot redefine builtin '{}'.",
                func, name
            ),
            EvalError::VariadicFormat => write!(
                f,
                "Function format invalid. Symbol '&' not followed by single symbol."
            ),
            EvalError::TooManyArguments { given, expected } => write!(
                f,
                "Function passed too many arguments. Got {}, Expected {}.",
                given, expected
            ),
            EvalError::Load { path, reason } => {
                write!(f, "Could not load '{}': {}", path, reason)
            }
            EvalError::User(msg) => write!(f, "{}", msg),
        }
    }
}
