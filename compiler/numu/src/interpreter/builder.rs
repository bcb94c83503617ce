//! `InterpreterBuilder` for configuring an [`Interpreter`].

use numu_eval::Environment;
use numu_ir::NodeArena;

use super::Interpreter;

/// Builder for [`Interpreter`].
///
/// By default the interpreter starts with the standard builtins and an
/// empty arena.
#[derive(Debug)]
pub struct InterpreterBuilder {
    builtins: bool,
    arena_capacity: Option<usize>,
    env: Option<Environment>,
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        InterpreterBuilder::new()
    }
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            builtins: true,
            arena_capacity: None,
            env: None,
        }
    }

    /// Whether a fresh environment gets the standard constants and functions.
    ///
    /// Ignored when an environment is supplied with [`env`](Self::env).
    #[must_use]
    pub fn builtins(mut self, builtins: bool) -> Self {
        self.builtins = builtins;
        self
    }

    /// Presize the arena for roughly `source_len` bytes of input.
    #[must_use]
    pub fn arena_capacity(mut self, source_len: usize) -> Self {
        self.arena_capacity = Some(source_len);
        self
    }

    /// Start from `env` exactly as given.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    pub fn build(self) -> Interpreter {
        let arena = self
            .arena_capacity
            .map_or_else(NodeArena::new, NodeArena::with_capacity);
        let env = self.env.unwrap_or_else(|| {
            if self.builtins {
                Environment::with_builtins()
            } else {
                Environment::new()
            }
        });
        Interpreter { arena, env }
    }
}
