//! Token types.

use std::fmt;

use numu_ir::Span;

/// Token kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // === Literals ===
    Number,
    String,
    Ident,

    // === Keywords ===
    Let,
    Fn,
    If,
    Else,
    For,
    While,
    Return,
    True,
    False,
    Inf,
    Nan,
    Pi,
    E,

    // === Operators ===
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    /// `**`
    StarStar,
    /// `=`
    Eq,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Bang,
    /// `->`
    Arrow,
    /// `&&`
    AmpAmp,
    /// `||`
    PipePipe,

    // === Punctuation ===
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Dot,
    Colon,
    Semicolon,

    Eof,
}

impl TokenKind {
    /// Human-readable description used in diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Ident => "identifier",
            TokenKind::Let => "`let`",
            TokenKind::Fn => "`fn`",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::For => "`for`",
            TokenKind::While => "`while`",
            TokenKind::Return => "`return`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::Inf => "`inf`",
            TokenKind::Nan => "`nan`",
            TokenKind::Pi => "`pi`",
            TokenKind::E => "`e`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Percent => "`%`",
            TokenKind::Caret => "`^`",
            TokenKind::StarStar => "`**`",
            TokenKind::Eq => "`=`",
            TokenKind::EqEq => "`==`",
            TokenKind::NotEq => "`!=`",
            TokenKind::Lt => "`<`",
            TokenKind::LtEq => "`<=`",
            TokenKind::Gt => "`>`",
            TokenKind::GtEq => "`>=`",
            TokenKind::Bang => "`!`",
            TokenKind::Arrow => "`->`",
            TokenKind::AmpAmp => "`&&`",
            TokenKind::PipePipe => "`||`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Comma => "`,`",
            TokenKind::Dot => "`.`",
            TokenKind::Colon => "`:`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Eof => "end of input",
        }
    }

    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Let
                | TokenKind::Fn
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::For
                | TokenKind::While
                | TokenKind::Return
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Inf
                | TokenKind::Nan
                | TokenKind::Pi
                | TokenKind::E
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token borrowing its text from the source buffer.
///
/// `text` is the exact source slice, except for strings, where it is the
/// slice between the quotes with escapes left undecoded. `value` is only
/// meaningful for `Number` tokens and is `0.0` otherwise.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub value: f64,
    pub span: Span,
    /// 1-based line of the token's first character.
    pub line: u32,
    /// 1-based column of the token's first character.
    pub column: u32,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, span: Span, line: u32, column: u32) -> Self {
        Token {
            kind,
            text,
            value: 0.0,
            span,
            line,
            column,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
