//! Numeric evaluation of numu expression trees.
//!
//! [`evaluate`] walks a tree in a [`NodeArena`](numu_ir::NodeArena) and
//! produces an `f64`. Names resolve against an [`Environment`], which the
//! caller owns and passes in explicitly; [`Environment::with_builtins`]
//! provides the standard constants (`pi`, `e`, `inf`) and functions.
//!
//! ```
//! use numu_eval::{evaluate, Environment};
//! use numu_ir::{BinaryOp, NodeArena, Span};
//!
//! let mut arena = NodeArena::new();
//! let two = arena.number(2.0, Span::DUMMY);
//! let pi = arena.variable("pi", Span::DUMMY);
//! let tau = arena.binary(BinaryOp::Mul, two, pi, Span::DUMMY);
//!
//! let mut env = Environment::with_builtins();
//! assert_eq!(evaluate(&arena, tau, &mut env), Ok(std::f64::consts::TAU));
//! ```

mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod unary_operators;

pub use builtins::install_builtins;
pub use environment::{Arity, Environment, NativeFn, NativeFunction};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::evaluate;
pub use operators::evaluate_binary;
pub use unary_operators::evaluate_unary;
