use crate::environment::Environment;
use crate::interpreter::EvalError;
use super::Value;
use itertools::Itertools;
use std::fmt;

pub type BuiltinFn = fn(&Environment, Vec<Value>) -> Result<Value, EvalError>;

#[derive(Clone)]
pub struct Builtin {
    pub name: String,
    pub func: BuiltinFn,
}

impl Builtin {
    pub fn call(&self, env: &Environment, args: Vec<Value>) -> Value {
        tracing::trace!(builtin = %self.name, args = args.len(), "calling builtin");
        (self.func)(env, args).unwrap_or_else(Value::from)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Builtin) -> bool {
        self.func as usize == other.func as usize
    }
}

/// A user-defined function. The environment belongs to this value alone:
/// cloning a `Lambda` deep-copies its bindings.
#[derive(Debug)]
pub struct Lambda {
    pub formals: Vec<String>,
    pub body: Box<Value>,
    pub env: Environment,
}

impl Lambda {
    pub fn new(formals: Vec<String>, body: Value) -> Lambda {
        Lambda {
            formals,
            body: Box::new(body),
            env: Environment::new(),
        }
    }
}

impl Clone for Lambda {
    fn clone(&self) -> Lambda {
        Lambda {
            formals: self.formals.clone(),
            body: self.body.clone(),
            env: self.env.deep_copy(),
        }
    }
}

impl PartialEq for Lambda {
    // captured environments are not part of a closure's identity
    fn eq(&self, other: &Lambda) -> bool {
        self.formals == other.formals && self.body == other.body
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Function {
    Builtin(Builtin),
    Lambda(Lambda),
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Function::Builtin(builtin) => write!(f, "<builtin: {}>", builtin.name),
            Function::Lambda(lambda) => write!(
                f,
                "(\\ {{{}}} {})",
                lambda.formals.iter().join(" "),
                lambda.body
            ),
        }
    }
}
