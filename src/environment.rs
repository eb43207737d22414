use crate::interpreter::EvalError;
use crate::value::{BuiltinFn, Value};
use itertools::Itertools;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

/// Where `print` and `load` diagnostics end up. Only the root scope's sink
/// is ever written.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Stdout,
    #[cfg(test)]
    Captured(Vec<String>),
}

struct Scope {
    vars: HashMap<String, Value>,
    builtins: HashSet<String>,
    parent: Option<Environment>,
    output: Output,
}

/// A handle to one scope of the scope chain.
///
/// Cloning the handle shares the scope; `deep_copy` duplicates its bindings.
#[derive(Clone)]
pub struct Environment {
    scope: Rc<RefCell<Scope>>,
}

impl Default for Environment {
    fn default() -> Environment {
        Environment::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let scope = self.scope.borrow();
        write!(
            f,
            "Environment {{ {} }}",
            scope.vars.keys().sorted().join(", ")
        )
    }
}

impl Environment {
    pub fn new() -> Environment {
        Environment {
            scope: Rc::new(RefCell::new(Scope {
                vars: HashMap::new(),
                builtins: HashSet::new(),
                parent: None,
                output: Output::Stdout,
            })),
        }
    }

    #[cfg(test)]
    pub fn with_enclosing(parent: &Environment) -> Environment {
        let env = Environment::new();
        env.set_parent(Some(parent.clone()));
        env
    }

    /// Root scope holding the whole builtin library.
    pub fn with_builtins() -> Environment {
        let env = Environment::new();
        crate::builtins::register(&env);
        env
    }

    /// Same as `with_builtins`, but everything printed is kept in memory.
    #[cfg(test)]
    pub fn with_captured_output() -> Environment {
        let env = Environment::with_builtins();
        env.scope.borrow_mut().output = Output::Captured(Vec::new());
        env
    }

    pub fn parent(&self) -> Option<Environment> {
        self.scope.borrow().parent.clone()
    }

    pub fn set_parent(&self, parent: Option<Environment>) {
        self.scope.borrow_mut().parent = parent;
    }

    /// The outermost scope of the chain.
    pub fn root(&self) -> Environment {
        let mut env = self.clone();
        while let Some(parent) = env.parent() {
            env = parent;
        }
        env
    }

    /// Looks `name` up through the chain and returns a copy of the bound value,
    /// or an error value when it is unbound everywhere.
    pub fn get(&self, name: &str) -> Value {
        let mut env = self.clone();
        loop {
            let parent = {
                let scope = env.scope.borrow();
                if let Some(value) = scope.vars.get(name) {
                    return value.clone();
                }
                scope.parent.clone()
            };
            match parent {
                Some(parent) => env = parent,
                None => return EvalError::UnboundSymbol(name.to_string()).into(),
            }
        }
    }

    /// Binds a copy of `value` in this scope, replacing any previous binding.
    pub fn put(&self, name: &str, value: &Value) {
        self.bind(name, value.clone());
    }

    /// Like `put`, but takes ownership of `value` instead of copying it.
    pub fn bind(&self, name: &str, value: Value) {
        self.scope.borrow_mut().vars.insert(name.to_string(), value);
    }

    /// Binds a copy of `value` in the outermost scope.
    pub fn define(&self, name: &str, value: &Value) {
        self.root().put(name, value);
    }

    pub fn add_builtin(&self, name: &str, func: BuiltinFn) {
        self.put(name, &Value::builtin(name, func));
        self.scope.borrow_mut().builtins.insert(name.to_string());
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        let mut env = Some(self.clone());
        while let Some(current) = env {
            if current.scope.borrow().builtins.contains(name) {
                return true;
            }
            env = current.parent();
        }
        false
    }

    /// Copies every binding; the parent scope is shared, not copied.
    pub fn deep_copy(&self) -> Environment {
        let scope = self.scope.borrow();
        Environment {
            scope: Rc::new(RefCell::new(Scope {
                vars: scope.vars.clone(),
                builtins: scope.builtins.clone(),
                parent: scope.parent.clone(),
                output: scope.output.clone(),
            })),
        }
    }

    pub fn emit(&self, line: &str) {
        let root = self.root();
        let mut scope = root.scope.borrow_mut();
        match &mut scope.output {
            Output::Stdout => println!("{}", line),
            #[cfg(test)]
            Output::Captured(lines) => lines.push(line.to_string()),
        }
    }

    #[cfg(test)]
    pub fn captured_output(&self) -> Vec<String> {
        match &self.root().scope.borrow().output {
            Output::Stdout => Vec::new(),
            Output::Captured(lines) => lines.clone(),
        }
    }
}
