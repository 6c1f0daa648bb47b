//! Token cursor for navigating the token stream.

use loxt_ir::{Location, Token, TokenKind, TokenTag};
use tracing::trace;

/// Read position over a token slice that ends with `Eof`.
///
/// Grammar rules `check` before they `advance`, and nothing checks for a
/// token past `Eof`, so the position never leaves the slice.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the first token.
    ///
    /// `tokens` must be non-empty and end with `Eof`, as every lexed stream
    /// does.
    pub fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            tokens.last().is_some_and(|t| t.kind == TokenKind::Eof),
            "token stream must end with Eof"
        );
        Cursor { tokens, pos: 0 }
    }

    /// Index of the current token.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        debug_assert!(self.pos < self.tokens.len(), "cursor position out of bounds");
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_tag(&self) -> TokenTag {
        self.current().tag()
    }

    #[inline]
    pub fn current_loc(&self) -> Location {
        self.current().loc
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_tag() == TokenTag::Eof
    }

    /// Whether the current token has kind `tag`. Never consumes.
    #[inline]
    pub fn check(&self, tag: TokenTag) -> bool {
        self.current_tag() == tag
    }

    /// Consume the current token and return it.
    ///
    /// Only call after a successful `check`; advancing past `Eof` is a bug.
    #[inline]
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        debug_assert!(token.kind != TokenKind::Eof, "advance past end of token stream");
        trace!(
            pos = self.pos,
            kind = token.kind.name(),
            line = token.loc.line,
            column = token.loc.column,
            "advance"
        );
        self.pos += 1;
        token
    }
}

#[cfg(test)]
mod tests;
