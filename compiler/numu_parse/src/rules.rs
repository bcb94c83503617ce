//! Pratt rule table.
//!
//! Each token kind maps to an optional prefix handler, an optional infix
//! handler, and the precedence at which the infix handler binds. Handlers are
//! enum tags dispatched by the parser, not function pointers.

use numu_ir::BinaryOp;
use numu_lexer::TokenKind;

use crate::{Associativity, Precedence};

/// Prefix (nud) handlers.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Prefix {
    Number,
    String,
    Boolean,
    /// `pi`, `e`, `inf`, `nan`
    Constant,
    Variable,
    Grouping,
    Matrix,
    Unary,
}

/// Infix (led) handlers.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Infix {
    Binary(BinaryOp),
    Assignment,
    Call,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct ParseRule {
    pub prefix: Option<Prefix>,
    pub infix: Option<Infix>,
    pub precedence: Precedence,
    pub associativity: Associativity,
}

impl ParseRule {
    const NONE: ParseRule = ParseRule {
        prefix: None,
        infix: None,
        precedence: Precedence::None,
        associativity: Associativity::Right,
    };

    const fn prefix(prefix: Prefix) -> ParseRule {
        ParseRule {
            prefix: Some(prefix),
            ..ParseRule::NONE
        }
    }

    const fn infix(infix: Infix, precedence: Precedence) -> ParseRule {
        ParseRule {
            infix: Some(infix),
            precedence,
            ..ParseRule::NONE
        }
    }

    /// Binary operators all group to the right.
    const fn binary(op: BinaryOp, precedence: Precedence) -> ParseRule {
        ParseRule {
            infix: Some(Infix::Binary(op)),
            precedence,
            associativity: Associativity::Right,
            prefix: None,
        }
    }

    const fn with_prefix(self, prefix: Prefix) -> ParseRule {
        ParseRule {
            prefix: Some(prefix),
            ..self
        }
    }
}

pub(crate) const fn rule(kind: TokenKind) -> ParseRule {
    match kind {
        // Literals and names
        TokenKind::Number => ParseRule::prefix(Prefix::Number),
        TokenKind::String => ParseRule::prefix(Prefix::String),
        TokenKind::True | TokenKind::False => ParseRule::prefix(Prefix::Boolean),
        TokenKind::Pi | TokenKind::E | TokenKind::Inf | TokenKind::Nan => {
            ParseRule::prefix(Prefix::Constant)
        }
        TokenKind::Ident => ParseRule::prefix(Prefix::Variable),

        // Brackets
        TokenKind::LParen => ParseRule::infix(Infix::Call, Precedence::Call).with_prefix(Prefix::Grouping),
        TokenKind::LBracket => ParseRule::prefix(Prefix::Matrix),

        // Arithmetic
        TokenKind::Minus => {
            ParseRule::binary(BinaryOp::Sub, Precedence::Term).with_prefix(Prefix::Unary)
        }
        TokenKind::Plus => ParseRule::binary(BinaryOp::Add, Precedence::Term),
        TokenKind::Star => ParseRule::binary(BinaryOp::Mul, Precedence::Factor),
        TokenKind::Slash => ParseRule::binary(BinaryOp::Div, Precedence::Factor),
        TokenKind::Percent => ParseRule::binary(BinaryOp::Mod, Precedence::Factor),
        TokenKind::Caret | TokenKind::StarStar => ParseRule::binary(BinaryOp::Pow, Precedence::Power),

        // Comparison and logic
        TokenKind::EqEq => ParseRule::binary(BinaryOp::Eq, Precedence::Equality),
        TokenKind::NotEq => ParseRule::binary(BinaryOp::NotEq, Precedence::Equality),
        TokenKind::Lt => ParseRule::binary(BinaryOp::Lt, Precedence::Comparison),
        TokenKind::LtEq => ParseRule::binary(BinaryOp::LtEq, Precedence::Comparison),
        TokenKind::Gt => ParseRule::binary(BinaryOp::Gt, Precedence::Comparison),
        TokenKind::GtEq => ParseRule::binary(BinaryOp::GtEq, Precedence::Comparison),
        TokenKind::AmpAmp => ParseRule::binary(BinaryOp::And, Precedence::And),
        TokenKind::PipePipe => ParseRule::binary(BinaryOp::Or, Precedence::Or),
        TokenKind::Bang => ParseRule::prefix(Prefix::Unary),

        TokenKind::Eq => ParseRule::infix(Infix::Assignment, Precedence::Assignment),

        TokenKind::Let
        | TokenKind::Fn
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::For
        | TokenKind::While
        | TokenKind::Return
        | TokenKind::Arrow
        | TokenKind::RParen
        | TokenKind::RBracket
        | TokenKind::LBrace
        | TokenKind::RBrace
        | TokenKind::Comma
        | TokenKind::Dot
        | TokenKind::Colon
        | TokenKind::Semicolon
        | TokenKind::Eof => ParseRule::NONE,
    }
}
