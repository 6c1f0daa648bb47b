//! Lexer error types.
//!
//! A lexical error never stops the scan. Each one is recorded here and also
//! appears inline as an `Error` token at the same location, so consumers
//! walking the token stream see it at its source position.

use loxt_diagnostic::{
    integer_too_large, unexpected_character, unterminated_string, Diagnostic, ErrorCode,
};
use loxt_ir::Location;
use thiserror::Error;

/// A lexical error and where it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("{loc}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub loc: Location,
}

/// What went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[error("unexpected character '{}'", .0.escape_debug())]
    UnexpectedChar(char),

    /// Opening `"` with no closing `"` before end of input. `loc` is the
    /// opening quote.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// Digit run that does not fit in a `u64`. `loc` is the first digit.
    #[error("integer literal too large")]
    IntOverflow,
}

impl LexError {
    #[inline]
    pub fn new(kind: LexErrorKind, loc: Location) -> Self {
        LexError { kind, loc }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnexpectedChar(_) => ErrorCode::E0002,
            LexErrorKind::IntOverflow => ErrorCode::E0003,
        }
    }

    /// Convert to a diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self.kind {
            LexErrorKind::UnexpectedChar(ch) => unexpected_character(self.loc, ch),
            LexErrorKind::UnterminatedString => unterminated_string(self.loc),
            LexErrorKind::IntOverflow => integer_too_large(self.loc),
        }
    }
}
