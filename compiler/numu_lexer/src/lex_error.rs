//! Lexer error types.

use numu_ir::Span;
use thiserror::Error;

/// A fatal lexing error. The lexer does not resynchronise after one.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind} at line {line}, column {column}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    pub line: u32,
    pub column: u32,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span, line: u32, column: u32) -> Self {
        LexError {
            kind,
            span,
            line,
            column,
        }
    }

    /// The message without its position.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LexErrorKind {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    /// Missing closing `"`.
    #[error("unterminated string")]
    UnterminatedString,

    /// A numeral `f64` parsing rejects. The scanner only captures
    /// `digits[.digits][(e|E)[+|-]digits]`, which always parses, so this is
    /// not produced today.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
}
