//! Operator-precedence (Pratt) parser for numu.
//!
//! Consumes tokens from a [`Lexer`] and builds one expression tree in a
//! caller-owned [`NodeArena`].
//!
//! # Design
//!
//! - **Rule table**: every token kind maps to a rule with an
//!   optional prefix handler, an optional infix handler, and a binding
//!   [`Precedence`]
//! - **Right grouping**: every binary operator parses its right operand at its
//!   own precedence, so `8 - 3 - 2` is `8 - (3 - 2)`
//! - **No recovery**: the first error aborts the parse and no tree is returned
//!
//! # Example
//!
//! ```
//! use numu_ir::{NodeArena, NodeKind};
//! use numu_lexer::Lexer;
//!
//! let mut arena = NodeArena::new();
//! let root = numu_parse::parse_complete(Lexer::new("2 + x"), &mut arena).unwrap();
//! assert!(matches!(arena.kind(root), NodeKind::Binary { .. }));
//! ```

mod cursor;
mod error;
mod grammar;
mod precedence;
mod rules;

pub use error::{ParseError, ParseErrorKind, SyntaxError};
pub use precedence::{Associativity, Precedence};

use numu_ir::{NodeArena, NodeId};
use numu_lexer::{Lexer, TokenKind};

use cursor::Cursor;

/// Parser state: the token window and the arena receiving nodes.
pub struct Parser<'src, 'a> {
    cursor: Cursor<'src>,
    arena: &'a mut NodeArena,
}

impl<'src, 'a> Parser<'src, 'a> {
    pub fn new(lexer: Lexer<'src>, arena: &'a mut NodeArena) -> Result<Self, SyntaxError> {
        Ok(Parser {
            cursor: Cursor::new(lexer)?,
            arena,
        })
    }

    /// Parse one expression, stopping at the first token that cannot
    /// continue it.
    pub fn parse(&mut self) -> Result<NodeId, SyntaxError> {
        self.parse_expression(Precedence::Assignment)
    }

    /// Parse one expression that must span the whole input.
    pub fn parse_complete(&mut self) -> Result<NodeId, SyntaxError> {
        let root = self.parse()?;
        self.expect(TokenKind::Eof, "after expression")?;
        Ok(root)
    }
}

/// Parse one expression from `lexer` into `arena`.
///
/// Trailing tokens after the expression are left unread.
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse(lexer: Lexer<'_>, arena: &mut NodeArena) -> Result<NodeId, SyntaxError> {
    Parser::new(lexer, arena)?.parse()
}

/// Parse one expression from `lexer` into `arena`, requiring end of input
/// after it.
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse_complete(lexer: Lexer<'_>, arena: &mut NodeArena) -> Result<NodeId, SyntaxError> {
    Parser::new(lexer, arena)?.parse_complete()
}

#[cfg(test)]
mod tests;
