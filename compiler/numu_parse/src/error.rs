//! Parse errors.

use numu_ir::Span;
use numu_lexer::{LexError, Token, TokenKind};
use thiserror::Error;

/// A fatal parse error; there is no recovery after one.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind} at line {line}, column {column}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub line: u32,
    pub column: u32,
}

impl ParseError {
    /// Error located at `token`.
    pub fn at(kind: ParseErrorKind, token: &Token<'_>) -> Self {
        ParseError {
            kind,
            span: token.span,
            line: token.line,
            column: token.column,
        }
    }

    /// The message without its position.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("expected expression, found {found}")]
    ExpectedExpression { found: TokenKind },

    #[error("expected {expected} {context}, found {found}")]
    ExpectedToken {
        expected: TokenKind,
        context: &'static str,
        found: TokenKind,
    },

    #[error("invalid assignment target")]
    InvalidAssignmentTarget,

    #[error("can only call named functions")]
    InvalidCallTarget,
}

/// Any error raised while turning source text into a tree.
///
/// The parser pulls tokens lazily, so lexing errors surface through it.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::Lex(e) => e.span,
            SyntaxError::Parse(e) => e.span,
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            SyntaxError::Lex(e) => e.line,
            SyntaxError::Parse(e) => e.line,
        }
    }

    pub fn column(&self) -> u32 {
        match self {
            SyntaxError::Lex(e) => e.column,
            SyntaxError::Parse(e) => e.column,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SyntaxError::Lex(e) => e.message(),
            SyntaxError::Parse(e) => e.message(),
        }
    }
}
