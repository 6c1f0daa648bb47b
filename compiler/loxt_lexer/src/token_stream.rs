//! Tokenizer output.

use std::fmt::Write as _;

use loxt_ir::{IdentId, LiteralId, LiteralLookup, Token, TokenKind};
use rustc_hash::FxHashMap;

use crate::LexError;

/// Tokens in source order plus the tables their payload ids point into.
///
/// Identifiers are interned: equal spellings share one [`IdentId`], assigned
/// in first-seen order. String and number literals are not deduplicated;
/// every occurrence gets a fresh [`LiteralId`]. String entries borrow from
/// the source, so the stream cannot outlive it.
#[derive(Clone, Debug)]
pub struct TokenStream<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    identifiers: Vec<&'src str>,
    identifier_ids: FxHashMap<&'src str, IdentId>,
    strings: Vec<&'src str>,
    numbers: Vec<u64>,
    errors: Vec<LexError>,
}

impl<'src> TokenStream<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        TokenStream {
            source,
            // Rough guess: one token per five bytes.
            tokens: Vec::with_capacity(source.len() / 5 + 1),
            identifiers: Vec::new(),
            identifier_ids: FxHashMap::default(),
            strings: Vec::new(),
            numbers: Vec::new(),
            errors: Vec::new(),
        }
    }

    // === Building ===

    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Intern an identifier spelling; equal spellings get the same id.
    pub(crate) fn intern_identifier(&mut self, spelling: &'src str) -> IdentId {
        if let Some(&id) = self.identifier_ids.get(spelling) {
            return id;
        }
        let id = IdentId::new(table_index(self.identifiers.len()));
        self.identifiers.push(spelling);
        self.identifier_ids.insert(spelling, id);
        id
    }

    /// Add a string literal body (quotes excluded).
    pub(crate) fn push_string(&mut self, body: &'src str) -> LiteralId {
        let id = LiteralId::new(table_index(self.strings.len()));
        self.strings.push(body);
        id
    }

    pub(crate) fn push_number(&mut self, value: u64) -> LiteralId {
        let id = LiteralId::new(table_index(self.numbers.len()));
        self.numbers.push(value);
        id
    }

    /// Record an error and its inline `Error` token.
    pub(crate) fn push_error(&mut self, error: LexError) {
        self.tokens.push(Token::new(TokenKind::Error, error.loc));
        self.errors.push(error);
    }

    // === Queries ===

    /// All tokens, ending with `Eof`.
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Number of tokens, `Eof` included.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Never true for a finished stream, which always holds `Eof`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Spelling of an interned identifier.
    ///
    /// # Panics
    /// If `id` did not come from this stream.
    #[inline]
    pub fn identifier(&self, id: IdentId) -> &'src str {
        self.identifiers[id.index()]
    }

    /// Body of a string literal, without the quotes.
    ///
    /// # Panics
    /// If `id` is not a string literal id from this stream.
    #[inline]
    pub fn string_literal(&self, id: LiteralId) -> &'src str {
        self.strings[id.index()]
    }

    /// # Panics
    /// If `id` is not a number literal id from this stream.
    #[inline]
    pub fn number_literal(&self, id: LiteralId) -> u64 {
        self.numbers[id.index()]
    }

    /// Number of distinct identifier spellings.
    #[inline]
    pub fn identifier_count(&self) -> usize {
        self.identifiers.len()
    }

    /// Whether any lexical error occurred.
    #[inline]
    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Lexical errors in source order.
    #[inline]
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Debug rendering of a token from this stream, e.g.
    /// `{kind: Number, line: 1, column: 1, literal: 123}`.
    pub fn render(&self, token: &Token) -> String {
        let mut out = format!(
            "{{kind: {}, line: {}, column: {}",
            token.kind.name(),
            token.loc.line,
            token.loc.column
        );
        // Writing into a String cannot fail.
        let _ = match token.kind {
            TokenKind::Identifier(id) => write!(out, ", identifier: {}", self.identifier(id)),
            TokenKind::String(id) => write!(out, ", literal: \"{}\"", self.string_literal(id)),
            TokenKind::Number(id) => write!(out, ", literal: {}", self.number_literal(id)),
            _ => Ok(()),
        };
        out.push('}');
        out
    }
}

impl LiteralLookup for TokenStream<'_> {
    fn identifier(&self, id: IdentId) -> &str {
        TokenStream::identifier(self, id)
    }

    fn string(&self, id: LiteralId) -> &str {
        self.string_literal(id)
    }

    fn number(&self, id: LiteralId) -> u64 {
        self.number_literal(id)
    }
}

impl<'a> IntoIterator for &'a TokenStream<'_> {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Table ids are `u32`; a source small enough for `lex` cannot overflow one.
#[inline]
fn table_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("literal table exceeds {} entries", u32::MAX))
}

#[cfg(test)]
mod tests;
