//! Evaluation errors and their centralized constructors.
//!
//! Every error the evaluator raises is built by one of the factory functions
//! below, so the message text lives in exactly one place.

use numu_ir::{InvariantViolation, NodeTag, Span};
use thiserror::Error;

/// Result of evaluation.
pub type EvalResult = Result<f64, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("logarithm of non-positive number")]
    LogOfNonPositive,
    #[error("square root of negative number")]
    SqrtOfNegative,

    // Names
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },
    #[error("unknown function: {name}")]
    UnknownFunction { name: String },

    // Functions
    #[error("function {name} expects {expected} arguments, got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error("function {name} requires at least one argument")]
    EmptyArguments { name: String },
    #[error("function already registered: {name}")]
    DuplicateFunction { name: String },
    #[error("invalid arity {raw}: expected -1 or a non-negative count")]
    InvalidArity { raw: i64 },

    // Unsupported
    #[error("operator `{op}` is not supported in numeric evaluation")]
    UnsupportedOperator { op: &'static str },
    #[error("cannot evaluate a {} node to a number", node.name())]
    UnsupportedNode { node: NodeTag },
    #[error("{feature} operations not yet implemented")]
    NotImplemented { feature: &'static str },

    /// A broken arena invariant: a bug in whatever built the tree.
    #[error("internal error: {0}")]
    Internal(#[from] InvariantViolation),
}

/// Evaluation error.
///
/// `span` locates the innermost node that failed, when known.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach `span` unless a more specific one is already set.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    /// The message without location.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Returns `true` for programming faults, as opposed to errors caused by
    /// the evaluated expression.
    pub fn is_internal(&self) -> bool {
        matches!(self.kind, EvalErrorKind::Internal(_))
    }
}

impl From<InvariantViolation> for EvalError {
    fn from(violation: InvariantViolation) -> Self {
        EvalError::from_kind(EvalErrorKind::Internal(violation))
    }
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn log_of_non_positive() -> EvalError {
    EvalError::from_kind(EvalErrorKind::LogOfNonPositive)
}

#[cold]
pub fn sqrt_of_negative() -> EvalError {
    EvalError::from_kind(EvalErrorKind::SqrtOfNegative)
}

// Variable and Function Errors

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn unknown_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownFunction {
        name: name.to_string(),
    })
}

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn empty_arguments(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyArguments {
        name: name.to_string(),
    })
}

#[cold]
pub fn duplicate_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateFunction {
        name: name.to_string(),
    })
}

#[cold]
pub fn invalid_arity(raw: i64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidArity { raw })
}

// Unsupported Constructs

#[cold]
pub fn unsupported_operator(op: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedOperator { op })
}

#[cold]
pub fn unsupported_node(node: NodeTag) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedNode { node })
}

#[cold]
pub fn not_implemented(feature: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotImplemented { feature })
}

#[cfg(test)]
mod tests;
