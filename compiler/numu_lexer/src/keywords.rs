//! Keyword resolution.
//!
//! The lookup uses the identifier's length as a first-pass filter (keywords
//! range from 1 to 6 chars), then matches against the keywords of that length.

use crate::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns `None` for a regular identifier.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        1 => match text {
            "e" => Some(TokenKind::E),
            _ => None,
        },
        2 => match text {
            "fn" => Some(TokenKind::Fn),
            "if" => Some(TokenKind::If),
            "pi" => Some(TokenKind::Pi),
            _ => None,
        },
        3 => match text {
            "for" => Some(TokenKind::For),
            "inf" => Some(TokenKind::Inf),
            "let" => Some(TokenKind::Let),
            "nan" => Some(TokenKind::Nan),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "false" => Some(TokenKind::False),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    }
}
