//! The numu expression language.
//!
//! numu parses small numeric expressions such as `2 * sin(pi / 4) + x`,
//! folds their constant parts, and evaluates them to an `f64`. This crate
//! ties the pipeline together:
//!
//! - `numu_lexer` turns source text into tokens
//! - `numu_parse` builds a tree in a `numu_ir` arena with a Pratt parser
//! - `numu_eval` walks the tree against an [`Environment`]
//!
//! ```
//! let mut interp = numu::Interpreter::new();
//! interp.set_variable("x", 3.0);
//! assert_eq!(interp.eval_str("x = x * 2").unwrap(), 6.0);
//! assert_eq!(interp.eval_str("max(x, 4)").unwrap(), 6.0);
//! ```
//!
//! # Debugging
//!
//! Call [`init_tracing`] and run with `RUST_LOG`:
//! - `RUST_LOG=numu_parse=debug` - one event per parse
//! - `RUST_LOG=numu_lexer=trace` - every token (very verbose)
//! - `RUST_LOG=numu_eval=debug,numu_ir=debug` - evaluation and folding

mod error;
mod interpreter;

use std::sync::Once;

pub use error::{Error, Result};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use numu_eval::{Arity, Environment, EvalError, EvalErrorKind, EvalResult};
pub use numu_ir::{NodeArena, NodeId, Span};
pub use numu_parse::{ParseError, SyntaxError};

/// Evaluates `source` in a fresh interpreter with the standard builtins.
pub fn eval(source: &str) -> Result<f64> {
    Interpreter::new().eval_str(source)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
