#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::*;

fn call(name: &str, args: &[f64]) -> EvalResult {
    Environment::with_builtins().call_function(name, args)
}

#[test]
fn constants() {
    let env = Environment::with_builtins();
    assert_eq!(env.get_variable("pi").unwrap(), consts::PI);
    assert_eq!(env.get_variable("e").unwrap(), consts::E);
    assert_eq!(env.get_variable("inf").unwrap(), f64::INFINITY);
}

#[test]
fn reducers() {
    assert_eq!(call("abs", &[-5.0]).unwrap(), 5.0);
    assert_eq!(call("min", &[3.0, -1.0, 2.0]).unwrap(), -1.0);
    assert_eq!(call("max", &[1.0, 7.0, 3.0]).unwrap(), 7.0);
    assert_eq!(call("sum", &[1.0, 2.0, 3.5]).unwrap(), 6.5);
    assert_eq!(call("avg", &[2.0, 4.0]).unwrap(), 3.0);
    assert_eq!(call("max", &[4.0]).unwrap(), 4.0);
}

#[test]
fn empty_argument_lists() {
    for name in ["min", "max", "avg"] {
        assert_eq!(
            call(name, &[]).unwrap_err().to_string(),
            format!("function {name} requires at least one argument")
        );
    }
    assert_eq!(call("sum", &[]).unwrap(), 0.0);
}

#[test]
fn math_functions() {
    assert_eq!(call("sqrt", &[0.0]).unwrap(), 0.0);
    assert_eq!(call("sqrt", &[16.0]).unwrap(), 4.0);
    assert_eq!(call("exp", &[0.0]).unwrap(), 1.0);
    assert_eq!(call("log", &[1.0]).unwrap(), 0.0);
    assert_eq!(call("cos", &[0.0]).unwrap(), 1.0);
    assert_eq!(call("pow", &[2.0, 10.0]).unwrap(), 1024.0);
}

#[test]
fn guarded_math_functions() {
    assert_eq!(
        call("sqrt", &[-1.0]).unwrap_err().to_string(),
        "square root of negative number"
    );
    assert_eq!(
        call("log", &[0.0]).unwrap_err().to_string(),
        "logarithm of non-positive number"
    );
    assert_eq!(
        call("log", &[-1.0]).unwrap_err().to_string(),
        "logarithm of non-positive number"
    );
}

#[test]
fn fixed_arity_enforced() {
    assert_eq!(
        call("abs", &[1.0, 2.0]).unwrap_err().to_string(),
        "function abs expects 1 arguments, got 2"
    );
    assert_eq!(
        call("pow", &[2.0]).unwrap_err().to_string(),
        "function pow expects 2 arguments, got 1"
    );
}

#[test]
fn install_into_empty_environment() {
    let mut env = Environment::new();
    env.set_variable("pi", 3.0);
    install_builtins(&mut env).unwrap();
    assert_eq!(env.get_variable("pi").unwrap(), consts::PI);
    assert!(env.has_function("avg"));
}

#[test]
fn install_refuses_clashes() {
    let mut env = Environment::new();
    env.register_function("max", Arity::Fixed(2), |args| Ok(args[0]))
        .unwrap();
    let err = install_builtins(&mut env).unwrap_err();
    assert_eq!(err.to_string(), "function already registered: max");
    assert!(!env.has_function("abs"));
    assert!(!env.has_variable("pi"));
}
