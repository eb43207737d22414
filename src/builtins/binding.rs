use crate::environment::Environment;
use crate::interpreter::EvalError;
use crate::value::Value;
use super::{pair, take_qexpr, take_symbols};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Target {
    Global,
    Local,
}

fn bind(env: &Environment, func: &str, args: Vec<Value>, target: Target) -> Result<Value, EvalError> {
    let mut args = args.into_iter();
    let symbols = match args.next() {
        Some(first) => take_qexpr(func, 0, first)?,
        None => {
            return Err(EvalError::NoArguments {
                func: func.to_string(),
            })
        }
    };
    let names = take_symbols(func, symbols)?;

    if let Some(name) = names.iter().find(|name| env.is_builtin(name)) {
        tracing::debug!(func, name = %name, "refusing to rebind builtin");
        return Err(EvalError::BuiltinRedefinition {
            func: func.to_string(),
            name: name.clone(),
        });
    }

    let mut values: Vec<Value> = args.collect();
    // `def {a b} {1 2}` takes its values from a single list of matching length
    if names.len() != 1 && values.len() == 1 {
        if let Some(Value::QExpr(cells)) = values.first() {
            if cells.len() == names.len() {
                values = cells.clone();
            }
        }
    }
    if names.len() != values.len() {
        return Err(EvalError::SymbolValueMismatch {
            func: func.to_string(),
            symbols: names.len(),
            values: values.len(),
        });
    }

    for (name, value) in names.iter().zip(&values) {
        match target {
            Target::Global => env.define(name, value),
            Target::Local => env.put(name, value),
        }
    }
    Ok(Value::sexpr())
}

pub fn def(env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    bind(env, "def", args, Target::Global)
}

pub fn put(env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    bind(env, "=", args, Target::Local)
}

pub fn lambda(_env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    let (formals, body) = pair("\\", args)?;
    let formals = take_symbols("\\", take_qexpr("\\", 0, formals)?)?;
    let body = take_qexpr("\\", 1, body)?;
    Ok(Value::lambda(formals, Value::QExpr(body)))
}

/// `fun {name formals...} {body}` is `def {name} (\ {formals...} {body})`.
pub fn fun(env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    let (header, body) = pair("fun", args)?;
    let mut names = take_symbols("fun", take_qexpr("fun", 0, header)?)?.into_iter();
    let name = match names.next() {
        Some(name) => name,
        None => {
            return Err(EvalError::EmptyList {
                func: "fun".to_string(),
                index: 0,
            })
        }
    };
    let body = take_qexpr("fun", 1, body)?;
    let function = Value::lambda(names.collect(), Value::QExpr(body));
    bind(
        env,
        "fun",
        vec![Value::QExpr(vec![Value::symbol(name)]), function],
        Target::Global,
    )
}

#[cfg(test)]
mod tests {
    use crate::builtins::testing::*;
    use crate::environment::Environment;
    use crate::value::Value;

    #[test]
    fn test_def_binds_several_globals() {
        check_value("(def {a b} 1 2)\na", Value::number(1.0));
        check_value("(def {a b} 1 2)\n(+ a b)", Value::number(3.0));
        check_value("(def {a b} {1 2})\na", Value::number(1.0));
        check_value("(def {a} {1 2})\na", nums(&[1.0, 2.0]));
        check_value("(def {a} 1)", Value::sexpr());
    }

    #[test]
    fn test_def_spreads_a_single_list_of_matching_length() {
        check_value("(def {xs} {1 2})\n(def {a b} xs)\nb", Value::number(2.0));
        check_value("(def {a b} {x y})\na", Value::symbol("x"));
        check_error("(def {xs} {1 2 3})\n(def {a b} xs)", &|err: &str| {
            assert_eq!(
                err,
                "Function 'def' passed incorrect number of values to symbols. Got 2 symbols and 1 values."
            )
        });
    }

    #[test]
    fn test_def_from_list_spreads_with_eval() {
        check_value("(eval (join {def {a b}} {1 2}))\nb", Value::number(2.0));
    }

    #[test]
    fn test_def_rejects_builtin_names() {
        check_error("(def {+} 1)", &|err: &str| {
            assert_eq!(err, "Function 'def' cannot redefine builtin '+'.")
        });
        check_error("(= {head} 1)", &|err: &str| {
            assert_eq!(err, "Function '=' cannot redefine builtin 'head'.")
        });
        check_error("(fun {eval x} {x})", &|err: &str| {
            assert_eq!(err, "Function 'fun' cannot redefine builtin 'eval'.")
        });
    }

    #[test]
    fn test_def_rejects_non_symbols() {
        check_error("(def {a 1} 1 2)", &|err: &str| {
            assert_eq!(err, "Function 'def' cannot define non-symbol. Got Number.")
        });
    }

    #[test]
    fn test_def_count_mismatch() {
        check_error("(def {a b} 1)", &|err: &str| {
            assert!(err.starts_with("Function 'def' passed incorrect number of values to symbols"))
        });
    }

    #[test]
    fn test_user_definitions_can_be_rebound() {
        check_value("(def {x} 1)\n(def {x} 2)\nx", Value::number(2.0));
    }

    #[test]
    fn test_put_is_local_to_the_call() {
        let env = Environment::with_captured_output();
        assert_eq!(
            evaluate_in(&env, "(fun {f x} {= {local} x})\n(f 5)").0,
            Value::sexpr()
        );
        assert_eq!(
            evaluate_in(&env, "local").0,
            Value::error("Unbound symbol 'local'")
        );
    }

    #[test]
    fn test_put_at_top_level_is_global() {
        check_value("(= {x} 4)\nx", Value::number(4.0));
    }

    #[test]
    fn test_lambda_needs_symbol_formals() {
        check_error("(\\ {x 1} {x})", &|err: &str| {
            assert_eq!(err, "Function '\\' cannot define non-symbol. Got Number.")
        });
        check_error("(\\ {x} 1)", &|err: &str| {
            assert!(err.contains("argument 1. Got Number, Expected Q-Expression."))
        });
    }

    #[test]
    fn test_fun() {
        check_value("(fun {square x} {* x x})\n(square 7)", Value::number(49.0));
        check_value("(fun {five} {5})\nfive", Value::lambda(vec![], nums(&[5.0])));
        check_error("(fun {} {1})", &|err: &str| {
            assert_eq!(err, "Function 'fun' passed an empty list for argument 0.")
        });
    }

    #[test]
    fn test_fun_with_variadic_tail() {
        check_value(
            "(fun {count x & xs} {eval (len xs)})\n(count 1 2 3 4)",
            Value::number(3.0),
        );
    }
}
