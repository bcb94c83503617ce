//! Token cursor with a two-token lookahead window.

use numu_lexer::{LexError, Lexer, Token, TokenKind};
use tracing::trace;

/// Pulls tokens from a [`Lexer`] on demand, keeping `current` and `next`.
///
/// Only `current` drives dispatch; `next` is filled eagerly, so a lexing
/// error one token ahead surfaces as soon as the token before it becomes
/// current.
pub(crate) struct Cursor<'src> {
    lexer: Lexer<'src>,
    current: Token<'src>,
    next: Token<'src>,
}

impl<'src> Cursor<'src> {
    pub fn new(mut lexer: Lexer<'src>) -> Result<Self, LexError> {
        let current = lexer.next_token()?;
        let next = lexer.next_token()?;
        Ok(Cursor {
            lexer,
            current,
            next,
        })
    }

    #[inline]
    pub fn current(&self) -> &Token<'src> {
        &self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consume the current token and return it.
    pub fn advance(&mut self) -> Result<Token<'src>, LexError> {
        let incoming = self.lexer.next_token()?;
        let consumed = std::mem::replace(&mut self.current, std::mem::replace(&mut self.next, incoming));
        trace!(kind = ?consumed.kind, text = consumed.text, "advance");
        Ok(consumed)
    }

    /// Consume the current token if it is `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> Result<bool, LexError> {
        if self.check(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
