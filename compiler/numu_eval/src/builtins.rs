//! Standard constants and functions.

use std::f64::consts;

use numu_ir::UnaryOp;
use tracing::debug;

use crate::environment::{Arity, Environment, NativeFunction};
use crate::errors::{duplicate_function, empty_arguments, EvalError, EvalResult};
use crate::unary_operators::evaluate_unary;

const CONSTANTS: [(&str, f64); 3] = [("pi", consts::PI), ("e", consts::E), ("inf", f64::INFINITY)];

/// Installs the standard library into `env`.
///
/// Constants overwrite existing variables. Functions do not: if any builtin
/// name is already registered nothing is installed and the clash is
/// reported.
pub fn install_builtins(env: &mut Environment) -> Result<(), EvalError> {
    let functions = functions();
    if let Some(taken) = functions.iter().find(|f| env.has_function(f.name())) {
        return Err(duplicate_function(taken.name()));
    }
    install(env, functions);
    Ok(())
}

/// Installs into an environment known to hold no functions.
pub(crate) fn define_builtins(env: &mut Environment) {
    install(env, functions());
}

fn install(env: &mut Environment, functions: Vec<NativeFunction>) {
    for (name, value) in CONSTANTS {
        env.set_variable(name, value);
    }
    debug!(
        constants = CONSTANTS.len(),
        functions = functions.len(),
        "installed builtins"
    );
    for function in functions {
        env.define_function(function);
    }
}

fn functions() -> Vec<NativeFunction> {
    vec![
        NativeFunction::new("abs", Arity::Fixed(1), |args| Ok(args[0].abs())),
        NativeFunction::new("min", Arity::Variadic, |args| {
            reduce("min", args, f64::min)
        }),
        NativeFunction::new("max", Arity::Variadic, |args| {
            reduce("max", args, f64::max)
        }),
        NativeFunction::new("sum", Arity::Variadic, |args| Ok(args.iter().sum())),
        NativeFunction::new("avg", Arity::Variadic, |args| {
            let total = reduce("avg", args, |a, b| a + b)?;
            #[expect(
                clippy::cast_precision_loss,
                reason = "argument counts are far below 2^52"
            )]
            let count = args.len() as f64;
            Ok(total / count)
        }),
        unary("sin", UnaryOp::Sin),
        unary("cos", UnaryOp::Cos),
        unary("tan", UnaryOp::Tan),
        unary("exp", UnaryOp::Exp),
        unary("log", UnaryOp::Log),
        unary("sqrt", UnaryOp::Sqrt),
        NativeFunction::new("pow", Arity::Fixed(2), |args| Ok(args[0].powf(args[1]))),
    ]
}

/// A one-argument function backed by the same code path as the operator, so
/// `sqrt(-1)` and a `Sqrt` node fail identically.
fn unary(name: &'static str, op: UnaryOp) -> NativeFunction {
    NativeFunction::new(name, Arity::Fixed(1), move |args| evaluate_unary(op, args[0]))
}

/// Folds a non-empty argument list.
fn reduce(name: &str, args: &[f64], f: impl Fn(f64, f64) -> f64) -> EvalResult {
    let (&first, rest) = args.split_first().ok_or_else(|| empty_arguments(name))?;
    Ok(rest.iter().fold(first, |acc, &x| f(acc, x)))
}

#[cfg(test)]
mod tests;
