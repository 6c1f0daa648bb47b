//! Tokenizer for loxt.
//!
//! Two layers:
//! 1. **Raw scanning** (`raw_token`): `logos` finds lexeme boundaries.
//! 2. **Cooking** ([`lex`]): attaches locations, resolves keywords, interns
//!    identifiers, fills the literal tables and turns scan failures into
//!    inline `Error` tokens.
//!
//! Lexing never stops early. Every lexical error becomes an `Error` token at
//! its location plus an entry in [`TokenStream::errors`], and scanning
//! resumes with the next character. The last token is always `Eof`.

mod keywords;
mod lex_error;
mod location;
mod raw_token;
mod token_stream;

pub use lex_error::{LexError, LexErrorKind};
pub use token_stream::TokenStream;

use logos::Logos;
use loxt_ir::{Location, Token, TokenKind};
use tracing::{debug, trace};

use location::LocationTracker;
use raw_token::RawToken;

/// Tokenize `source`.
///
/// The returned stream borrows `source` for its string table.
///
/// # Panics
/// If `source` is larger than `u32::MAX` bytes.
#[tracing::instrument(level = "debug", skip_all)]
pub fn lex(source: &str) -> TokenStream<'_> {
    assert!(
        u32::try_from(source.len()).is_ok(),
        "source file exceeds {} bytes",
        u32::MAX
    );

    let mut stream = TokenStream::new(source);
    let mut tracker = LocationTracker::new(source);
    let mut raw = RawToken::lexer(source);

    while let Some(result) = raw.next() {
        let span = raw.span();
        let loc = tracker.advance_to(span.start);

        let raw_token = match result {
            Ok(raw_token) => raw_token,
            Err(()) => {
                let end = report_unexpected(&mut stream, &mut tracker, span.start, span.end);
                // The failed match may end inside a multi-byte character.
                if end > span.end {
                    raw.bump(end - span.end);
                }
                continue;
            }
        };

        let slice = raw.slice();
        let kind = match raw_token {
            RawToken::LineComment => None,
            RawToken::LeftParen => Some(TokenKind::LeftParen),
            RawToken::RightParen => Some(TokenKind::RightParen),
            RawToken::LeftBrace => Some(TokenKind::LeftBrace),
            RawToken::RightBrace => Some(TokenKind::RightBrace),
            RawToken::Comma => Some(TokenKind::Comma),
            RawToken::Period => Some(TokenKind::Period),
            RawToken::Minus => Some(TokenKind::Minus),
            RawToken::Plus => Some(TokenKind::Plus),
            RawToken::SemiColon => Some(TokenKind::SemiColon),
            RawToken::BackSlash => Some(TokenKind::BackSlash),
            RawToken::Asterisk => Some(TokenKind::Asterisk),
            RawToken::Bang => Some(TokenKind::Bang),
            RawToken::BangEqual => Some(TokenKind::BangEqual),
            RawToken::Equal => Some(TokenKind::Equal),
            RawToken::EqualEqual => Some(TokenKind::EqualEqual),
            RawToken::Greater => Some(TokenKind::Greater),
            RawToken::GreaterEqual => Some(TokenKind::GreaterEqual),
            RawToken::Less => Some(TokenKind::Less),
            RawToken::LessEqual => Some(TokenKind::LessEqual),
            RawToken::Number => match slice.parse::<u64>() {
                Ok(value) => Some(TokenKind::Number(stream.push_number(value))),
                Err(_) => {
                    // Only overflow is possible: the slice is all digits.
                    record_error(&mut stream, LexErrorKind::IntOverflow, loc);
                    None
                }
            },
            RawToken::String => {
                let body = &slice[1..slice.len() - 1];
                Some(TokenKind::String(stream.push_string(body)))
            }
            RawToken::UnterminatedString => {
                record_error(&mut stream, LexErrorKind::UnterminatedString, loc);
                None
            }
            RawToken::Word => Some(
                keywords::lookup(slice)
                    .unwrap_or_else(|| TokenKind::Identifier(stream.intern_identifier(slice))),
            ),
        };

        if let Some(kind) = kind {
            stream.push(Token::new(kind, loc));
        }
    }

    let eof = tracker.advance_to(source.len());
    stream.push(Token::new(TokenKind::Eof, eof));

    debug!(
        bytes = source.len(),
        tokens = stream.len(),
        identifiers = stream.identifier_count(),
        errors = stream.errors().len(),
        "lexed source"
    );
    stream
}

/// Report every character in `start..end` as unexpected, one error each.
///
/// Returns the byte offset after the last reported character, which may be
/// past `end` when `end` falls inside a character.
fn report_unexpected(
    stream: &mut TokenStream<'_>,
    tracker: &mut LocationTracker<'_>,
    start: usize,
    end: usize,
) -> usize {
    let mut offset = start;
    for ch in stream.source()[start..].chars() {
        if offset >= end {
            break;
        }
        let loc = tracker.advance_to(offset);
        record_error(stream, LexErrorKind::UnexpectedChar(ch), loc);
        offset += ch.len_utf8();
    }
    offset
}

fn record_error(stream: &mut TokenStream<'_>, kind: LexErrorKind, loc: Location) {
    trace!(%loc, %kind, "lex error");
    stream.push_error(LexError::new(kind, loc));
}

#[cfg(test)]
mod tests;
