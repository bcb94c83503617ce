//! Variable bindings and the native function table.
//!
//! # Design
//!
//! The environment is an explicit value owned by the caller; nothing is
//! global. Function names are registered once: a second registration under
//! the same name is an error rather than a silent overwrite. Variables, by
//! contrast, are freely reassigned.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::builtins;
use crate::errors::{
    arity_mismatch, duplicate_function, invalid_arity, undefined_variable, unknown_function,
    EvalError, EvalResult,
};

/// How many arguments a native function accepts.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Arity {
    Fixed(usize),
    Variadic,
}

impl Arity {
    /// Decodes the `-1 = variadic` convention used by embedders.
    pub fn from_raw(raw: i64) -> Result<Self, EvalError> {
        match raw {
            -1 => Ok(Arity::Variadic),
            n => usize::try_from(n)
                .map(Arity::Fixed)
                .map_err(|_| invalid_arity(raw)),
        }
    }

    pub fn raw(self) -> i64 {
        match self {
            Arity::Fixed(n) => i64::try_from(n).unwrap_or(i64::MAX),
            Arity::Variadic => -1,
        }
    }

    #[inline]
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Fixed(n) => n == count,
            Arity::Variadic => true,
        }
    }
}

/// Signature shared by every native function.
pub type NativeFn = dyn Fn(&[f64]) -> EvalResult + Send + Sync;

/// A registered function: the implementation plus its arity contract.
#[derive(Clone)]
pub struct NativeFunction {
    name: String,
    arity: Arity,
    func: Arc<NativeFn>,
}

impl NativeFunction {
    pub fn new(
        name: impl Into<String>,
        arity: Arity,
        func: impl Fn(&[f64]) -> EvalResult + Send + Sync + 'static,
    ) -> Self {
        NativeFunction {
            name: name.into(),
            arity,
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Validates the argument count, then runs the implementation.
    pub fn call(&self, args: &[f64]) -> EvalResult {
        if let Arity::Fixed(expected) = self.arity {
            if args.len() != expected {
                return Err(arity_mismatch(&self.name, expected, args.len()));
            }
        }
        (self.func)(args)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Evaluation context: variable values and callable functions.
#[derive(Clone, Default)]
pub struct Environment {
    variables: FxHashMap<String, f64>,
    functions: FxHashMap<String, NativeFunction>,
}

impl Environment {
    /// An empty environment with no constants and no functions.
    pub fn new() -> Self {
        Environment::default()
    }

    /// An environment holding the standard constants and functions.
    pub fn with_builtins() -> Self {
        let mut env = Environment::new();
        builtins::define_builtins(&mut env);
        env
    }

    // ===== Variables =====

    /// Binds `name`, replacing any previous value.
    pub fn set_variable(&mut self, name: impl Into<String>, value: f64) {
        self.variables.insert(name.into(), value);
    }

    pub fn get_variable(&self, name: &str) -> EvalResult {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| undefined_variable(name))
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    // ===== Functions =====

    /// Registers a native function.
    ///
    /// Fails if `name` is already taken; the existing entry is left intact.
    pub fn register_function(
        &mut self,
        name: impl Into<String>,
        arity: Arity,
        func: impl Fn(&[f64]) -> EvalResult + Send + Sync + 'static,
    ) -> Result<(), EvalError> {
        let name = name.into();
        if self.functions.contains_key(&name) {
            return Err(duplicate_function(&name));
        }
        debug!(name = %name, arity = arity.raw(), "registered function");
        let function = NativeFunction::new(name.clone(), arity, func);
        self.functions.insert(name, function);
        Ok(())
    }

    /// Inserts without the duplicate check. Callers guarantee `name` is free.
    pub(crate) fn define_function(&mut self, function: NativeFunction) {
        self.functions.insert(function.name.clone(), function);
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn function(&self, name: &str) -> Option<&NativeFunction> {
        self.functions.get(name)
    }

    /// Looks up `name` and calls it with `args`.
    pub fn call_function(&self, name: &str, args: &[f64]) -> EvalResult {
        self.functions
            .get(name)
            .ok_or_else(|| unknown_function(name))?
            .call(args)
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut functions: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        functions.sort_unstable();
        f.debug_struct("Environment")
            .field("variables", &self.variables.len())
            .field("functions", &functions)
            .finish()
    }
}
