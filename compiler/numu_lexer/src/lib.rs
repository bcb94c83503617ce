//! Lexer for the numu expression language.
//!
//! Turns a source buffer into [`Token`]s on demand. Tokens borrow their text
//! from the source; only numeric literals carry an extracted value.
//!
//! # Design
//!
//! - Hand-written scanner over a byte [`Cursor`]; every token boundary is an
//!   ASCII byte, so slicing never splits a character
//! - Whitespace and `#` line comments are skipped before each token and never
//!   produce tokens themselves
//! - Errors are fatal: after a [`LexError`] the caller is expected to stop

mod cursor;
mod keywords;
mod lex_error;
mod token;

pub use cursor::Cursor;
pub use lex_error::{LexError, LexErrorKind};
pub use token::{Token, TokenKind};

use numu_ir::Span;
use tracing::trace;

/// On-demand tokenizer over one source buffer.
///
/// Once the end of input is reached every further call to
/// [`next_token`](Lexer::next_token) returns another `Eof` token. To lex the
/// buffer again, construct a new lexer.
#[derive(Clone, Debug)]
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
        }
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Result<Token<'src>, LexError> {
        self.skip_trivia();
        let token = self.scan()?;
        trace!(kind = ?token.kind, text = token.text, line = token.line, column = token.column, "token");
        Ok(token)
    }

    /// Lex the whole buffer, ending with (and including) the `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token<'src>>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// Skip whitespace and `#` line comments.
    fn skip_trivia(&mut self) {
        loop {
            match self.cursor.current() {
                b' ' | b'\t' | b'\n' | b'\r' if !self.cursor.is_eof() => self.cursor.advance(),
                b'#' => self.cursor.eat_while(|b| b != b'\n'),
                _ => return,
            }
        }
    }

    fn scan(&mut self) -> Result<Token<'src>, LexError> {
        let start = self.cursor.pos();
        let (line, column) = (self.cursor.line(), self.cursor.column());

        if self.cursor.is_eof() {
            return Ok(Token::new(TokenKind::Eof, "", Span::point(start), line, column));
        }

        let kind = match self.cursor.current() {
            b'0'..=b'9' => return self.number(start, line, column),
            b'.' if self.cursor.peek().is_ascii_digit() => {
                return self.number(start, line, column)
            }
            b'"' => return self.string(start, line, column),
            b if b.is_ascii_alphabetic() || b == b'_' => {
                self.cursor
                    .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
                let text = self.cursor.slice_from(start);
                let kind = keywords::lookup(text).unwrap_or(TokenKind::Ident);
                return Ok(self.token(kind, start, line, column));
            }
            b => match (b, self.cursor.peek()) {
                (b'=', b'=') => self.two(TokenKind::EqEq),
                (b'!', b'=') => self.two(TokenKind::NotEq),
                (b'<', b'=') => self.two(TokenKind::LtEq),
                (b'>', b'=') => self.two(TokenKind::GtEq),
                (b'-', b'>') => self.two(TokenKind::Arrow),
                (b'*', b'*') => self.two(TokenKind::StarStar),
                (b'&', b'&') => self.two(TokenKind::AmpAmp),
                (b'|', b'|') => self.two(TokenKind::PipePipe),
                _ => match single_char_kind(b) {
                    Some(kind) => {
                        self.cursor.advance();
                        kind
                    }
                    None => return Err(self.unexpected_char(start, line, column)),
                },
            },
        };
        Ok(self.token(kind, start, line, column))
    }

    #[inline]
    fn two(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance_n(2);
        kind
    }

    #[inline]
    fn token(&self, kind: TokenKind, start: u32, line: u32, column: u32) -> Token<'src> {
        let end = self.cursor.pos();
        Token::new(kind, self.cursor.slice(start, end), Span::new(start, end), line, column)
    }

    /// Scan a numeral: digits, at most one decimal point, then at most one
    /// exponent. The exponent marker is only taken when a digit (optionally
    /// after one sign) follows it.
    fn number(&mut self, start: u32, line: u32, column: u32) -> Result<Token<'src>, LexError> {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        if matches!(self.cursor.current(), b'e' | b'E') {
            let next = self.cursor.peek();
            let signed = matches!(next, b'+' | b'-') && self.cursor.peek2().is_ascii_digit();
            if next.is_ascii_digit() || signed {
                self.cursor.advance_n(if signed { 2 } else { 1 });
                self.cursor.eat_while(|b| b.is_ascii_digit());
            }
        }

        let token = self.token(TokenKind::Number, start, line, column);
        match token.text.parse::<f64>() {
            Ok(value) => Ok(token.with_value(value)),
            Err(_) => Err(LexError::new(
                LexErrorKind::InvalidNumber(token.text.to_owned()),
                token.span,
                line,
                column,
            )),
        }
    }

    /// Scan a string literal. Backslash escapes the next character, which is
    /// kept verbatim.
    fn string(&mut self, start: u32, line: u32, column: u32) -> Result<Token<'src>, LexError> {
        self.cursor.advance();
        loop {
            if self.cursor.is_eof() {
                return Err(LexError::new(
                    LexErrorKind::UnterminatedString,
                    Span::new(start, self.cursor.pos()),
                    line,
                    column,
                ));
            }
            match self.cursor.current() {
                b'"' => break,
                b'\\' => {
                    self.cursor.advance();
                    self.cursor.advance_char();
                }
                _ => self.cursor.advance_char(),
            }
        }
        let inner_end = self.cursor.pos();
        self.cursor.advance();
        let mut token = self.token(TokenKind::String, start, line, column);
        token.text = self.cursor.slice(start + 1, inner_end);
        Ok(token)
    }

    #[cold]
    fn unexpected_char(&self, start: u32, line: u32, column: u32) -> LexError {
        let c = self.cursor.current_char().unwrap_or('\0');
        let end = start + c.len_utf8() as u32;
        LexError::new(
            LexErrorKind::UnexpectedChar(c),
            Span::new(start, end),
            line,
            column,
        )
    }
}

fn single_char_kind(b: u8) -> Option<TokenKind> {
    Some(match b {
        b'+' => TokenKind::Plus,
        b'-' => TokenKind::Minus,
        b'*' => TokenKind::Star,
        b'/' => TokenKind::Slash,
        b'%' => TokenKind::Percent,
        b'^' => TokenKind::Caret,
        b'=' => TokenKind::Eq,
        b'<' => TokenKind::Lt,
        b'>' => TokenKind::Gt,
        b'!' => TokenKind::Bang,
        b'(' => TokenKind::LParen,
        b')' => TokenKind::RParen,
        b'[' => TokenKind::LBracket,
        b']' => TokenKind::RBracket,
        b'{' => TokenKind::LBrace,
        b'}' => TokenKind::RBrace,
        b',' => TokenKind::Comma,
        b'.' => TokenKind::Dot,
        b':' => TokenKind::Colon,
        b';' => TokenKind::Semicolon,
        _ => return None,
    })
}
