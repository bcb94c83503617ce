use numu_eval::EvalError;
use numu_ir::Span;
use numu_parse::SyntaxError;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Anything that can go wrong between source text and a value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// Source location of the failure, when one is known.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Syntax(err) => Some(err.span()),
            Error::Eval(err) => err.span,
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax(_))
    }
}
