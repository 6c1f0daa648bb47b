//! Reserved word resolution.
//!
//! Keywords are resolved after the identifier regex matches, so the raw
//! scanner stays small. The lookup uses the word's length as a first-pass
//! filter (keywords are 2-6 chars), then matches against the keywords of
//! that length.

use loxt_ir::TokenKind;

/// Look up a reserved word by text.
///
/// Returns `None` for ordinary identifiers. Matching is exact and
/// case-sensitive: `While` is an identifier.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "if" => Some(TokenKind::If),
            "or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "for" => Some(TokenKind::For),
            "fun" => Some(TokenKind::Fun),
            "nil" => Some(TokenKind::Nil),
            "var" => Some(TokenKind::Var),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "class" => Some(TokenKind::Class),
            "false" => Some(TokenKind::False),
            "print" => Some(TokenKind::Print),
            "super" => Some(TokenKind::Super),
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

#[cfg(test)]
mod tests;
