//! A self-contained session: one arena, one environment.

mod builder;

pub use builder::InterpreterBuilder;

use numu_eval::{evaluate, Arity, Environment, EvalResult};
use numu_ir::{simplify, NodeArena, NodeId};
use numu_lexer::Lexer;
use numu_parse::parse_complete;

use crate::Result;

/// Parses and evaluates expressions against a private environment.
///
/// Trees from every [`parse`](Self::parse) stay in the same arena, so an id
/// returned earlier remains valid for the interpreter's lifetime. Two
/// interpreters share nothing.
#[derive(Debug)]
pub struct Interpreter {
    arena: NodeArena,
    env: Environment,
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

impl Interpreter {
    /// An interpreter with the standard constants and functions.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Parses one complete expression; trailing tokens are an error.
    pub fn parse(&mut self, source: &str) -> Result<NodeId> {
        Ok(parse_complete(Lexer::new(source), &mut self.arena)?)
    }

    pub fn eval(&mut self, id: NodeId) -> Result<f64> {
        Ok(evaluate(&self.arena, id, &mut self.env)?)
    }

    /// Parses and evaluates `source`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn eval_str(&mut self, source: &str) -> Result<f64> {
        let id = self.parse(source)?;
        self.eval(id)
    }

    /// Folds constant subtrees of `id`, returning the new root.
    pub fn simplify(&mut self, id: NodeId) -> NodeId {
        simplify(&mut self.arena, id)
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    pub fn set_variable(&mut self, name: impl Into<String>, value: f64) {
        self.env.set_variable(name, value);
    }

    pub fn register_function(
        &mut self,
        name: impl Into<String>,
        arity: Arity,
        func: impl Fn(&[f64]) -> EvalResult + Send + Sync + 'static,
    ) -> Result<()> {
        Ok(self.env.register_function(name, arity, func)?)
    }
}
